use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{event as common, DomainStore, Level, Notifier, Resource, Routes};
use serde_json::json;
use tracing::debug;

use super::borrowed;
use crate::messages::event;
use crate::model::{ClassConfig, ClassFlight, Flight, FlightInput, FlightQuery};

pub struct FlightStore {
    store: DomainStore<Flight>,
}

deref_store!(FlightStore, Flight);

impl FlightStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn fetch_filtered(&self, query: &FlightQuery) -> Result<Vec<Flight>, ClientError> {
        self.store.fetch_all(&borrowed(&query.pairs())).await
    }

    pub async fn fetch_today(&self) -> Result<Vec<Flight>, ClientError> {
        self.store
            .fetch_list(Call::get("/flights/today"), event::TODAY_FAILED)
            .await
    }

    pub async fn fetch_upcoming(&self) -> Result<Vec<Flight>, ClientError> {
        self.store
            .fetch_list(Call::get("/flights/upcoming"), event::UPCOMING_FAILED)
            .await
    }

    /// Flights that still have seats to sell.
    pub async fn fetch_available(&self) -> Result<Vec<Flight>, ClientError> {
        self.store
            .fetch_list(Call::get("/flights/available"), event::AVAILABLE_FAILED)
            .await
    }

    /// Create a flight and open the given classes on it, one after the
    /// other. The flight is re-read afterwards so the mirrored entry carries
    /// its classes. A class failing aborts the rest; the flight itself is
    /// not rolled back.
    pub async fn create_with_classes(
        &self,
        input: &FlightInput,
        classes: &[ClassConfig],
    ) -> Result<Flight, ClientError> {
        let transport = self.store.transport().clone();
        let work = async move {
            let flight: Flight = transport
                .fetch(Call::post(Flight::routes().create).json(input))
                .await?;
            for class in classes {
                let payload = json!({
                    "flightId": flight.id,
                    "classType": class.class_type,
                    "seatCapacity": class.seat_capacity,
                    "price": class.price,
                });
                let created: ClassFlight = transport
                    .fetch(Call::post("/class-flights/create").json(&payload))
                    .await?;
                debug!("flight {}: opened class {}", flight.id, created.class_type);
            }
            let item = Routes::resolve("/flights/{id}", &flight.id);
            transport.fetch::<Flight>(Call::get(item)).await
        };
        let flight = self
            .store
            .run(common::CREATE_FAILED, work, |m, flight: &Flight| {
                m.push_back(flight.clone())
            })
            .await?;
        self.store.announce(Level::Success, common::CREATED);
        Ok(flight)
    }

    /// Soft delete through `POST /flights/{id}/delete`.
    pub async fn cancel(&self, id: &str) -> Result<(), ClientError> {
        self.store.delete(&id.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ClassConfig, FlightInput};
    use crate::testing::Harness;
    use flightdeck_client::Method;
    use serde_json::json;

    fn flight(id: &str, classes: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "airlineId": "GA",
            "airplaneId": "GA-A320-001",
            "originAirportCode": "CGK",
            "destinationAirportCode": "DPS",
            "departureTime": "2026-10-20T08:00:00",
            "arrivalTime": "2026-10-20T10:50:00",
            "status": 1,
            "classes": classes,
            "isDeleted": false
        })
    }

    fn input() -> FlightInput {
        FlightInput {
            id: "GA-404".into(),
            airline_id: "GA".into(),
            airplane_id: "GA-A320-001".into(),
            origin_airport_code: "CGK".into(),
            destination_airport_code: "DPS".into(),
            departure_time: "2026-10-20T08:00:00".into(),
            arrival_time: "2026-10-20T10:50:00".into(),
            terminal: None,
            gate: None,
            baggage_allowance: Some(20),
            facilities: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn cancel_is_soft_and_posted() {
        let h = Harness::new();
        h.stub
            .ok(Method::Get, "/flights/all", &json!([flight("GA-404", json!([]))]))
            .ok(Method::Post, "/flights/GA-404/delete", &json!(null));
        let store = &h.travel.flights;
        store.fetch_all(&[]).await.unwrap();
        store.cancel("GA-404").await.unwrap();

        assert_eq!(h.stub.last_request().unwrap().method, Method::Post);
        assert_eq!(store.len(), 1);
        assert!(store.items()[0].is_deleted);
        assert_eq!(h.notices.last().unwrap().message, "Flight cancelled successfully");
    }

    #[tokio::test]
    async fn create_with_classes_mirrors_refetched_flight() {
        let h = Harness::new();
        let class = |id: i64, kind: &str| {
            json!({
                "id": id, "flightId": "GA-404", "classType": kind,
                "seatCapacity": 10, "availableSeats": 10, "price": 1500000.0
            })
        };
        let full = flight(
            "GA-404",
            json!([
                {"id": 1, "classType": "Economy", "seatCapacity": 10, "availableSeats": 10},
                {"id": 2, "classType": "Business", "seatCapacity": 10, "availableSeats": 10}
            ]),
        );
        h.stub
            .ok(Method::Post, "/flights/create", &flight("GA-404", json!([])))
            .ok(Method::Post, "/class-flights/create", &class(1, "Economy"))
            .ok(Method::Post, "/class-flights/create", &class(2, "Business"))
            .ok(Method::Get, "/flights/GA-404", &full);
        let classes = vec![
            ClassConfig { class_type: "Economy".into(), seat_capacity: 10, price: 1500000.0 },
            ClassConfig { class_type: "Business".into(), seat_capacity: 10, price: 4500000.0 },
        ];

        let store = &h.travel.flights;
        let created = store.create_with_classes(&input(), &classes).await.unwrap();
        assert_eq!(created.classes.len(), 2);
        assert_eq!(store.items(), vec![created]);
        assert_eq!(h.stub.request_count(), 4);

        let second = &h.stub.requests()[2];
        let body = second.body.as_ref().unwrap();
        assert_eq!(body["flightId"], "GA-404");
        assert_eq!(body["classType"], "Business");
        assert_eq!(h.notices.last().unwrap().message, "Flight created successfully");
    }

    #[tokio::test]
    async fn create_with_classes_stops_at_failing_class() {
        let h = Harness::new();
        h.stub
            .ok(Method::Post, "/flights/create", &flight("GA-404", json!([])))
            .error(Method::Post, "/class-flights/create", 400, "Invalid seat capacity");
        let classes = vec![
            ClassConfig { class_type: "Economy".into(), seat_capacity: 0, price: 1.0 },
            ClassConfig { class_type: "Business".into(), seat_capacity: 10, price: 1.0 },
        ];

        let store = &h.travel.flights;
        let err = store.create_with_classes(&input(), &classes).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid seat capacity");
        assert_eq!(h.stub.request_count(), 2);
        assert!(store.is_empty());
        assert_eq!(
            h.notices.last().unwrap().message,
            "Error creating flight: Invalid seat capacity"
        );
    }

    #[tokio::test]
    async fn listing_endpoints() {
        let h = Harness::new();
        h.stub
            .ok(Method::Get, "/flights/today", &json!([flight("GA-1", json!([]))]))
            .error(Method::Get, "/flights/upcoming", 500, "boom");
        let store = &h.travel.flights;
        assert_eq!(store.fetch_today().await.unwrap().len(), 1);
        store.fetch_upcoming().await.unwrap_err();
        assert_eq!(
            h.notices.last().unwrap().message,
            "Error loading upcoming flights: boom"
        );
        // A failed reload keeps what was mirrored.
        assert_eq!(store.len(), 1);
    }
}
