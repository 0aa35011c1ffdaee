use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// POST /api/projects body. Missing fields become empty strings rather than
/// a rejection; the length bounds are a guardrail, not a contract.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct ProjectForm {
    #[serde(default)]
    #[validate(max_length = 255)]
    pub name: String,
    #[serde(default)]
    #[validate(max_length = 1000)]
    pub description: String,
    #[serde(default)]
    #[validate(max_length = 255)]
    pub technology: String,
}

impl Into<models::Project> for ProjectForm {
    fn into(self) -> models::Project {
        models::Project::new(self.name, self.description, self.technology)
    }
}
