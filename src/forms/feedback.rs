use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// POST /api/feedback body.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct FeedbackForm {
    #[serde(default)]
    #[validate(max_length = 255)]
    pub name: String,
    #[serde(default)]
    #[validate(max_length = 255)]
    pub email: String,
    #[serde(default)]
    #[validate(max_length = 4000)]
    pub message: String,
}

impl Into<models::Feedback> for FeedbackForm {
    fn into(self) -> models::Feedback {
        models::Feedback::new(self.name, self.email, self.message)
    }
}
