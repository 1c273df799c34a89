use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Power {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PowerForm {
    #[validate(length(min = 1, message = "A power must have a name."))]
    pub name: String,
    #[validate(length(
        min = 20,
        message = "Power description should be at least 20 characters long."
    ))]
    pub description: String,
}

/// Partial update. Absent fields keep their stored value; the route rejects
/// explicit `null`s before this is deserialized.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PowerUpdateForm {
    #[validate(length(min = 1, message = "A power must have a name."))]
    pub name: Option<String>,
    #[validate(length(
        min = 20,
        message = "Power description should be at least 20 characters long."
    ))]
    pub description: Option<String>,
}

impl PowerUpdateForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
