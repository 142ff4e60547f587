use crate::domain::models::brand::{Brand, BrandExperience, BrandFeatures, BrandType, PageLayout, PageSection};
use crate::domain::models::community::Community;

pub const DEFAULT_BRAND_ID: &str = "default";
pub const DEFAULT_PRIMARY_COLOR: &str = "#1d4ed8";
pub const DEFAULT_SECONDARY_COLOR: &str = "#f59e0b";

const DEFAULT_COMMUNITIES: [(&str, &str); 5] = [
    ("downtown", "Downtown"),
    ("midtown", "Midtown"),
    ("riverside", "Riverside"),
    ("old-town", "Old Town"),
    ("harbor", "Harbor District"),
];

const DEFAULT_SECTIONS: [&str; 6] = ["hero", "featured-businesses", "deals", "events", "leaderboard", "reviews"];

pub fn default_communities() -> Vec<Community> {
    DEFAULT_COMMUNITIES
        .iter()
        .map(|(id, name)| Community::new(id, name))
        .collect()
}

pub fn default_experience() -> BrandExperience {
    BrandExperience {
        headline: Some("Discover {city}".to_string()),
        description: Some("Local businesses, deals and events around {city}.".to_string()),
        search_placeholder: Some("Search restaurants, shops, services...".to_string()),
        background_image: None,
        featured_categories: vec!["Restaurants".to_string(), "Shopping".to_string(), "Services".to_string()],
    }
}

pub fn default_page_layout() -> PageLayout {
    PageLayout {
        sections: DEFAULT_SECTIONS
            .iter()
            .map(|name| PageSection { name: name.to_string(), enabled: true })
            .collect(),
    }
}

/// The brand used whenever nothing is persisted or nothing else resolves.
pub fn builtin_brand() -> Brand {
    Brand {
        id: DEFAULT_BRAND_ID.to_string(),
        name: "Downtown Guide".to_string(),
        domain: String::new(),
        logo: None,
        primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
        is_active: true,
        is_primary: true,
        brand_type: BrandType::Community,
        features: BrandFeatures::default(),
        communities: DEFAULT_COMMUNITIES.iter().map(|(id, _)| id.to_string()).collect(),
        experience: Some(default_experience()),
        page_layout: Some(default_page_layout()),
    }
}
