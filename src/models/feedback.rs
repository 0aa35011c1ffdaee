use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Feedback {
    pub id: i32, // assigned by the store: current count + 1
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            message,
            created_at: Utc::now(),
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Feedback {
            id: 0,
            name: "".to_string(),
            email: "".to_string(),
            message: "".to_string(),
            created_at: Default::default(),
        }
    }
}
