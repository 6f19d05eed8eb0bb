use flightdeck_client::Method;
use flightdeck_mirror::{Deletion, Resource, Routes};
use serde::{Deserialize, Serialize};

use super::filter_pairs;

numeric_enum! {
    /// Flight lifecycle.
    FlightStatus {
        Scheduled = 1 => "Scheduled",
        Delayed = 2 => "Delayed",
        Departed = 3 => "Departed",
        Arrived = 4 => "Arrived",
        Cancelled = 5 => "Cancelled",
    }
}

/// Class capacity as embedded in a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFlightSummary {
    pub id: i64,
    pub class_type: String,
    pub seat_capacity: u32,
    pub available_seats: u32,
}

/// Flight. PK = flight number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline_id: String,
    #[serde(default)]
    pub airline_name: String,
    #[serde(default)]
    pub airline_country: String,
    pub airplane_id: String,
    #[serde(default)]
    pub airplane_model: String,
    pub origin_airport_code: String,
    pub destination_airport_code: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage_allowance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    pub status: FlightStatus,
    #[serde(default)]
    pub status_label: String,
    #[serde(default)]
    pub classes: Vec<ClassFlightSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Cancelled flights stay listed.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Resource for Flight {
    type Id = String;
    const COLLECTION: &'static str = "flights";
    const LABEL: &'static str = "flight";
    const LABEL_PLURAL: &'static str = "flights";
    const DELETION: Deletion = Deletion::Soft;

    fn id(&self) -> String {
        self.id.clone()
    }

    /// Cancellation is `POST /flights/{id}/delete`.
    fn routes() -> Routes {
        Routes::standard(Self::COLLECTION).delete_via(Method::Post)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightInput {
    pub id: String,
    pub airline_id: String,
    pub airplane_id: String,
    pub origin_airport_code: String,
    pub destination_airport_code: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage_allowance: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<String>,
    /// Update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FlightStatus>,
}

/// A class to open on a new flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassConfig {
    pub class_type: String,
    pub seat_capacity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// `YYYY-MM-DD`.
    pub departure_date: Option<String>,
    pub airline_id: Option<String>,
    pub status: Option<FlightStatus>,
}

impl FlightQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        filter_pairs(vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("departureDate", self.departure_date.clone()),
            ("airlineId", self.airline_id.clone()),
            ("status", self.status.map(|s| u8::from(s).to_string())),
        ])
    }
}
