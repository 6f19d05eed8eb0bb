use flightdeck_mirror::{Deletion, Resource};
use serde::{Deserialize, Serialize};

use super::filter_pairs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airplane {
    pub id: String,
    pub airline_id: String,
    #[serde(default)]
    pub airline_name: String,
    pub model: String,
    pub seat_capacity: u32,
    pub manufacture_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Deactivated airplanes stay listed.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Resource for Airplane {
    type Id = String;
    const COLLECTION: &'static str = "airplanes";
    const LABEL: &'static str = "airplane";
    const LABEL_PLURAL: &'static str = "airplanes";
    const DELETION: Deletion = Deletion::Soft;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirplaneInput {
    /// Set on update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub airline_id: String,
    pub model: String,
    pub seat_capacity: u32,
    pub manufacture_year: i32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirplaneQuery {
    pub airline_id: Option<String>,
    pub model: Option<String>,
    pub manufacture_year: Option<i32>,
    pub is_deleted: Option<bool>,
}

impl AirplaneQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        filter_pairs(vec![
            ("airlineId", self.airline_id.clone()),
            ("model", self.model.clone()),
            ("manufactureYear", self.manufacture_year.map(|y| y.to_string())),
            ("isDeleted", self.is_deleted.map(|d| d.to_string())),
        ])
    }
}
