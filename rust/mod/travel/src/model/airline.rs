use flightdeck_mirror::Resource;
use serde::{Deserialize, Serialize};

/// Airline. PK = 3-character code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for Airline {
    type Id = String;
    const COLLECTION: &'static str = "airlines";
    const LABEL: &'static str = "airline";
    const LABEL_PLURAL: &'static str = "airlines";

    fn id(&self) -> String {
        self.id.clone()
    }
}

/// Create and update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlineInput {
    pub id: String,
    pub name: String,
    pub country: String,
}
