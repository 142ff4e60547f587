use serde::Serialize;
use crate::domain::models::brand::{Brand, RenderedExperience};
use crate::domain::models::community::Community;
use crate::domain::services::brand_registry::PersistOutcome;
use crate::domain::services::brand_resolver::MatchRule;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentBrandResponse {
    pub brand: Brand,
    pub matched_by: MatchRule,
    pub primary_brand_id: String,
}

#[derive(Serialize)]
pub struct ExperienceResponse {
    pub community: Community,
    pub experience: RenderedExperience,
}

#[derive(Serialize)]
pub struct LayoutResponse {
    pub sections: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceBrandsResponse {
    pub persist: PersistOutcome,
    pub count: usize,
    pub current_brand: Brand,
}
