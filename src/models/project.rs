use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub id: i32, // assigned by the store: current count + 1
    pub name: String,
    pub description: String,
    pub technology: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    InProgress,
}

impl Project {
    pub fn new(name: String, description: String, technology: String) -> Self {
        Self {
            id: 0,
            name,
            description,
            technology,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

impl Default for Project {
    fn default() -> Self {
        Project {
            id: 0,
            name: "".to_string(),
            description: "".to_string(),
            technology: "".to_string(),
            status: Default::default(),
            created_at: Default::default(),
        }
    }
}
