use serde::Serialize;

use crate::domain::models::brand::Brand;
use crate::domain::services::defaults::builtin_brand;

/// The addressing information a brand is resolved from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandRequest {
    pub host: String,
    pub path: String,
    pub preview: Option<String>,
}

impl BrandRequest {
    pub fn new(host: &str, path: &str, preview: Option<String>) -> Self {
        Self {
            host: normalize_host(host),
            path: path.to_string(),
            preview: preview.filter(|p| !p.trim().is_empty()),
        }
    }

    /// Brand id taken from a `.../brand/<id>/...` path.
    pub fn path_preview(&self) -> Option<&str> {
        let segments: Vec<&str> = self.path.split('/').collect();
        segments
            .windows(2)
            .find(|pair| pair[0] == "brand" && !pair[1].is_empty())
            .map(|pair| pair[1])
    }
}

/// Lowercases a host and strips port, IPv6 brackets and the trailing root dot.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim();
    let host = if let Some(rest) = raw.strip_prefix('[') {
        rest.split(']').next().unwrap_or_default()
    } else {
        raw.split(':').next().unwrap_or_default()
    };
    host.trim_end_matches('.').to_ascii_lowercase()
}

/// Which rule of the resolution chain produced the brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    PreviewQuery,
    PreviewPath,
    ExactDomain,
    PartialDomain,
    Primary,
    FirstActive,
    BuiltinDefault,
}

/// Evaluated in order; the first rule that yields a brand wins.
const RESOLUTION_CHAIN: [MatchRule; 6] = [
    MatchRule::PreviewQuery,
    MatchRule::PreviewPath,
    MatchRule::ExactDomain,
    MatchRule::PartialDomain,
    MatchRule::Primary,
    MatchRule::FirstActive,
];

const FALLBACK_CHAIN: [MatchRule; 2] = [MatchRule::Primary, MatchRule::FirstActive];

impl MatchRule {
    fn find_match<'a>(self, request: &BrandRequest, brands: &'a [Brand]) -> Option<&'a Brand> {
        let active = || brands.iter().filter(|b| b.is_active);
        let by_id = |id: &str| brands.iter().find(|b| b.id == id);

        match self {
            // Preview may show inactive or non-matching brands.
            MatchRule::PreviewQuery => request.preview.as_deref().and_then(by_id),
            MatchRule::PreviewPath => request.path_preview().and_then(by_id),
            MatchRule::ExactDomain => {
                if request.host.is_empty() {
                    return None;
                }
                active().find(|b| {
                    let domain = normalize_host(&b.domain);
                    !domain.is_empty() && domain == request.host
                })
            }
            MatchRule::PartialDomain => {
                if request.host.is_empty() {
                    return None;
                }
                active().find(|b| {
                    let domain = normalize_host(&b.domain);
                    !domain.is_empty() && request.host.contains(&domain)
                })
            }
            MatchRule::Primary => active().find(|b| b.is_primary),
            MatchRule::FirstActive => active().next(),
            MatchRule::BuiltinDefault => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub brand: Brand,
    pub matched_by: MatchRule,
}

fn run_chain(chain: &[MatchRule], request: &BrandRequest, brands: &[Brand]) -> Resolution {
    chain
        .iter()
        .find_map(|rule| {
            rule.find_match(request, brands).map(|brand| Resolution {
                brand: brand.clone(),
                matched_by: *rule,
            })
        })
        .unwrap_or_else(|| Resolution {
            brand: builtin_brand(),
            matched_by: MatchRule::BuiltinDefault,
        })
}

/// Picks exactly one brand for a request from a registry snapshot.
pub fn resolve(request: &BrandRequest, brands: &[Brand]) -> Resolution {
    run_chain(&RESOLUTION_CHAIN, request, brands)
}

/// The fallback step alone: first active primary, else first active, else
/// the built-in brand.
pub fn primary_brand(brands: &[Brand]) -> Brand {
    run_chain(&FALLBACK_CHAIN, &BrandRequest::default(), brands).brand
}
