use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::models::brand::Brand;

pub const PRIMARY_TOKEN: &str = "--brand-primary";
pub const SECONDARY_TOKEN: &str = "--brand-secondary";

/// Document-level CSS custom properties for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTokens {
    tokens: BTreeMap<String, String>,
}

impl ThemeTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.tokens.insert(name.to_string(), value.to_string());
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.tokens {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push_str("}\n");
        css
    }
}

/// Pushes the brand colours into the theme. Without a theme store this is a
/// no-op; unsafe or empty colour values are skipped.
pub fn apply_brand_styling(theme: Option<&mut ThemeTokens>, brand: &Brand) {
    let Some(theme) = theme else {
        return;
    };

    for (token, value) in [(PRIMARY_TOKEN, &brand.primary_color), (SECONDARY_TOKEN, &brand.secondary_color)] {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if !is_safe_color(value) {
            warn!(brand_id = %brand.id, token, "Skipping unsafe colour value");
            continue;
        }
        theme.set(token, value);
    }
}

// Hex, named colours and functional notation such as `hsl(210 40% 50%)`.
fn is_safe_color(value: &str) -> bool {
    value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-' | '/'))
}
