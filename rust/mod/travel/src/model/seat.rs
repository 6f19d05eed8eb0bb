use flightdeck_mirror::Resource;
use serde::{Deserialize, Serialize};

/// A seat of a class flight. Available iff no passenger holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: i64,
    pub class_flight_id: i64,
    #[serde(default)]
    pub class_type: String,
    #[serde(default)]
    pub flight_id: String,
    pub seat_number: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_name: Option<String>,
}

impl Seat {
    pub fn is_consistent(&self) -> bool {
        self.is_available == self.passenger_id.is_none()
    }
}

impl Resource for Seat {
    type Id = i64;
    const COLLECTION: &'static str = "seats";
    const LABEL: &'static str = "seat";
    const LABEL_PLURAL: &'static str = "seats";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub class_flight_id: i64,
    pub seat_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<String>,
}
