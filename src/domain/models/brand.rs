use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrandType {
    #[default]
    Community,
    Interest,
}

/// Capability toggles for a tenant. The well-known toggles default to on;
/// any other named toggle is kept as-is in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BrandFeatures {
    pub rewards: bool,
    pub events: bool,
    pub challenges: bool,
    pub deals: bool,
    pub reviews: bool,
    pub leaderboard: bool,
    pub achievements: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, bool>,
}

impl Default for BrandFeatures {
    fn default() -> Self {
        Self {
            rewards: true,
            events: true,
            challenges: true,
            deals: true,
            reviews: true,
            leaderboard: true,
            achievements: true,
            extra: BTreeMap::new(),
        }
    }
}

impl BrandFeatures {
    pub fn is_enabled(&self, name: &str) -> bool {
        match name {
            "rewards" => self.rewards,
            "events" => self.events,
            "challenges" => self.challenges,
            "deals" => self.deals,
            "reviews" => self.reviews,
            "leaderboard" => self.leaderboard,
            "achievements" => self.achievements,
            other => self.extra.get(other).copied().unwrap_or(false),
        }
    }
}

/// Presentation overrides. Headline and description may contain `{city}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandExperience {
    pub headline: Option<String>,
    pub description: Option<String>,
    pub search_placeholder: Option<String>,
    pub background_image: Option<String>,
    pub featured_categories: Vec<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedExperience {
    pub city: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub search_placeholder: Option<String>,
    pub background_image: Option<String>,
    pub featured_categories: Vec<String>,
}

impl BrandExperience {
    pub fn render(&self, city: &str) -> RenderedExperience {
        let fill = |template: &Option<String>| template.as_ref().map(|t| t.replace("{city}", city));

        RenderedExperience {
            city: city.to_string(),
            headline: fill(&self.headline),
            description: fill(&self.description),
            search_placeholder: self.search_placeholder.clone(),
            background_image: self.background_image.clone(),
            featured_categories: self.featured_categories.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PageLayout {
    pub sections: Vec<PageSection>,
}

impl PageLayout {
    pub fn enabled_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.enabled)
            .map(|s| s.name.as_str())
            .collect()
    }
}

/// A white-label tenant. This is also the persisted JSON shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default = "enabled_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub brand_type: BrandType,
    #[serde(default)]
    pub features: BrandFeatures,
    #[serde(default)]
    pub communities: Vec<String>,
    #[serde(default)]
    pub experience: Option<BrandExperience>,
    #[serde(default)]
    pub page_layout: Option<PageLayout>,
}

impl Brand {
    pub fn new(id: impl Into<String>, name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            logo: None,
            primary_color: String::new(),
            secondary_color: String::new(),
            is_active: true,
            is_primary: false,
            brand_type: BrandType::Community,
            features: BrandFeatures::default(),
            communities: Vec::new(),
            experience: None,
            page_layout: None,
        }
    }

    /// `communities` only narrows what a community-type brand surfaces.
    pub fn scopes_communities(&self) -> bool {
        self.brand_type == BrandType::Community
    }
}

fn enabled_by_default() -> bool {
    true
}
