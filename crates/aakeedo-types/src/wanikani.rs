use serde::{Deserialize, Serialize};

use crate::validate::{ShapeError, Validate, non_empty_str};

/// Learner profile nested under `data` in the `/user` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub username: String,
    /// WaniKani level, 1-60
    pub level: u8,
}

impl Validate for UserData {
    fn validate(&self) -> Result<(), ShapeError> {
        non_empty_str("username", &self.username)?;

        if !(1..=60).contains(&self.level) {
            return Err(ShapeError::new(
                "level",
                format!("{} is outside 1-60", self.level),
            ));
        }

        Ok(())
    }
}

/// Envelope around every WaniKani resource. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub object: String,
    pub url: String,
    #[serde(default)]
    pub data_updated_at: Option<String>,
    pub data: UserData,
}

impl Validate for UserResponse {
    fn validate(&self) -> Result<(), ShapeError> {
        non_empty_str("object", &self.object)?;
        non_empty_str("url", &self.url)?;
        self.data.validate()
    }
}
