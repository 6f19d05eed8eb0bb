use flightdeck_client::Method;
use flightdeck_mirror::{Deletion, Resource, Routes};
use serde::{Deserialize, Serialize};

use super::filter_pairs;

numeric_enum! {
    BookingStatus {
        Unpaid = 1 => "Unpaid",
        Paid = 2 => "Paid",
        Cancelled = 3 => "Cancelled",
        Rescheduled = 4 => "Rescheduled",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerSummary {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub seat_number: String,
}

/// Booking. `passenger_count == passengers.len()`, `total_price >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub flight_id: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub origin_airport_code: String,
    #[serde(default)]
    pub destination_airport_code: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    pub class_flight_id: i64,
    #[serde(default)]
    pub class_type: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub passenger_count: u32,
    pub status: BookingStatus,
    #[serde(default)]
    pub status_label: String,
    pub total_price: f64,
    #[serde(default)]
    pub passengers: Vec<PassengerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Cancelled bookings stay listed.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Booking {
    pub fn is_consistent(&self) -> bool {
        self.passenger_count as usize == self.passengers.len() && self.total_price >= 0.0
    }
}

impl Resource for Booking {
    type Id = String;
    const COLLECTION: &'static str = "bookings";
    const LABEL: &'static str = "booking";
    const LABEL_PLURAL: &'static str = "bookings";
    const DELETION: Deletion = Deletion::Soft;

    fn id(&self) -> String {
        self.id.clone()
    }

    /// Listed at `/bookings`, cancelled through `POST /bookings/{id}/delete`.
    fn routes() -> Routes {
        Routes::standard(Self::COLLECTION)
            .list_at("/bookings")
            .delete_via(Method::Post)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub id: String,
    pub flight_id: String,
    pub class_flight_id: i64,
    pub contact_email: String,
    pub contact_phone: String,
    pub passenger_count: u32,
    pub total_price: f64,
    #[serde(default)]
    pub passenger_ids: Vec<String>,
    /// Update only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingQuery {
    pub is_active: Option<bool>,
    pub status: Option<BookingStatus>,
    pub email: Option<String>,
}

impl BookingQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        filter_pairs(vec![
            ("isActive", self.is_active.map(|a| a.to_string())),
            ("status", self.status.map(|s| u8::from(s).to_string())),
            ("email", self.email.clone()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatistics {
    pub flight_id: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub route: String,
    pub booking_count: u64,
    pub potential_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatistics {
    pub total_bookings: u64,
    pub potential_revenue: f64,
    #[serde(default)]
    pub flight_stats: Vec<FlightStatistics>,
}
