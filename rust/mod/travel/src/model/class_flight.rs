use flightdeck_mirror::Resource;
use serde::{Deserialize, Serialize};

/// A cabin class on a flight. `available_seats <= seat_capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFlight {
    pub id: i64,
    pub flight_id: String,
    #[serde(default)]
    pub flight_number: String,
    pub class_type: String,
    pub seat_capacity: u32,
    pub available_seats: u32,
    pub price: f64,
}

impl ClassFlight {
    pub fn is_consistent(&self) -> bool {
        self.available_seats <= self.seat_capacity
    }
}

impl Resource for ClassFlight {
    type Id = i64;
    const COLLECTION: &'static str = "class-flights";
    const LABEL: &'static str = "class flight";
    const LABEL_PLURAL: &'static str = "class flights";

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFlightInput {
    /// Set on update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub flight_id: String,
    pub class_type: String,
    pub seat_capacity: u32,
    /// Update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
    pub price: f64,
}
