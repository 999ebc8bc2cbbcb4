use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Identifier of the embedded sample user
pub const SAMPLE_USER_ID: i32 = 1;

/// Name of the embedded sample user
pub const SAMPLE_USER_NAME: &str = "Thiago";

/// User record
///
/// Serialized with PascalCase keys, so `{"Id":1,"Name":"Thiago"}` maps onto
/// `id` and `name`. Both keys are required; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: i32,
    pub name: String,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The fixed user every simulated fetch resolves to
    pub fn sample() -> Self {
        Self::new(SAMPLE_USER_ID, SAMPLE_USER_NAME)
    }

    /// Parse a JSON document into a user
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(text)?)
    }
}
