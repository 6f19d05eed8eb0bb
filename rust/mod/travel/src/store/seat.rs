use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Level, Notifier, Routes};

use crate::messages::event;
use crate::model::Seat;

pub struct SeatStore {
    store: DomainStore<Seat>,
}

deref_store!(SeatStore, Seat);

impl SeatStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    /// Free seats of a class flight.
    pub async fn fetch_available(&self, class_flight_id: i64) -> Result<Vec<Seat>, ClientError> {
        let call = Call::get("/seats/all")
            .query("classFlightId", class_flight_id)
            .query("isAvailable", true);
        self.store.fetch_list(call, event::AVAILABLE_FAILED).await
    }

    /// Put a passenger on a seat. The mirrored seat is replaced by the
    /// server's version.
    pub async fn assign(
        &self,
        id: i64,
        passenger_id: &str,
        class_flight_id: i64,
    ) -> Result<Seat, ClientError> {
        let call = Call::post(Routes::resolve("/seats/{id}/assign", &id))
            .query("passengerId", passenger_id)
            .query("classFlightId", class_flight_id);
        let seat = self
            .store
            .perform(call, event::ASSIGN_FAILED, |m, seat: &Seat| {
                m.replace(seat.clone());
            })
            .await?;
        self.store.announce(Level::Success, event::ASSIGNED);
        Ok(seat)
    }

    pub async fn release(&self, id: i64) -> Result<Seat, ClientError> {
        let call = Call::post(Routes::resolve("/seats/{id}/release", &id));
        let seat = self
            .store
            .perform(call, event::RELEASE_FAILED, |m, seat: &Seat| {
                m.replace(seat.clone());
            })
            .await?;
        self.store.announce(Level::Success, event::RELEASED);
        Ok(seat)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Harness;
    use flightdeck_client::Method;
    use serde_json::json;

    fn seat(passenger: Option<&str>) -> serde_json::Value {
        json!({
            "id": 11,
            "classFlightId": 7,
            "seatNumber": "12A",
            "isAvailable": passenger.is_none(),
            "passengerId": passenger
        })
    }

    #[tokio::test]
    async fn assign_and_release_replace_the_seat() {
        let h = Harness::new();
        h.stub
            .ok(Method::Get, "/seats/all", &json!([seat(None)]))
            .ok(Method::Post, "/seats/11/assign", &seat(Some("P-1")))
            .ok(Method::Post, "/seats/11/release", &seat(None));
        let store = &h.travel.seats;

        store.fetch_available(7).await.unwrap();
        let req = h.stub.last_request().unwrap();
        assert_eq!(req.query_param("classFlightId"), Some("7"));
        assert_eq!(req.query_param("isAvailable"), Some("true"));

        let assigned = store.assign(11, "P-1", 7).await.unwrap();
        assert!(assigned.is_consistent());
        assert_eq!(store.get(&11).unwrap().passenger_id.as_deref(), Some("P-1"));
        assert_eq!(h.stub.last_request().unwrap().query_param("passengerId"), Some("P-1"));
        assert_eq!(h.notices.last().unwrap().message, "Seat assigned successfully");

        store.release(11).await.unwrap();
        assert!(store.get(&11).unwrap().is_available);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn taken_seat_rejected() {
        let h = Harness::new();
        h.stub
            .error(Method::Post, "/seats/11/assign", 400, "Seat is already taken");
        let err = h.travel.seats.assign(11, "P-2", 7).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            h.notices.last().unwrap().message,
            "Error assigning seat: Seat is already taken"
        );
    }
}
