use serde::Deserialize;

#[derive(Deserialize)]
pub struct ExperienceQuery {
    pub community: Option<String>,
}
