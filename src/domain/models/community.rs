use serde::{Deserialize, Serialize};
use crate::domain::models::brand::Brand;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: String,
    pub name: String,
}

impl Community {
    pub fn new(id: &str, name: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string() }
    }
}

/// Process-wide community reference data, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CommunityCatalog {
    communities: Vec<Community>,
}

impl CommunityCatalog {
    pub fn new(communities: Vec<Community>) -> Self {
        Self { communities }
    }

    pub fn all(&self) -> &[Community] {
        &self.communities
    }

    pub fn find(&self, id: &str) -> Option<&Community> {
        self.communities.iter().find(|c| c.id == id)
    }

    /// Communities a brand may surface, in the brand's own order.
    /// Interest brands are not community-scoped and see the whole catalog.
    pub fn for_brand(&self, brand: &Brand) -> Vec<&Community> {
        if !brand.scopes_communities() {
            return self.communities.iter().collect();
        }

        brand.communities
            .iter()
            .filter_map(|id| self.find(id))
            .collect()
    }
}
