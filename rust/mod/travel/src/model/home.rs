use flightdeck_mirror::{Resource, Routes};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dashboard counters from `/home`. Unknown fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStatistics {
    #[serde(default)]
    pub active_flights_today: i64,
    #[serde(default)]
    pub bookings_created_today: i64,
    #[serde(default)]
    pub total_airlines_registered: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Singleton id of the home statistics.
pub const HOME_ID: &str = "home";

impl Resource for HomeStatistics {
    type Id = &'static str;
    const COLLECTION: &'static str = "home";
    const LABEL: &'static str = "home statistics";
    const LABEL_PLURAL: &'static str = "home statistics";

    fn id(&self) -> &'static str {
        HOME_ID
    }

    fn routes() -> Routes {
        let mut routes = Routes::standard(Self::COLLECTION);
        routes.item = "/home".to_string();
        routes
    }
}
