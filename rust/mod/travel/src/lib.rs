//! Travel back office: airlines, fleet, flights, seats, bookings,
//! passengers and the loyalty program.
//!
//! Every store mirrors one entity family on top of
//! [`DomainStore`](flightdeck_mirror::DomainStore). [`Travel`] wires them to
//! one transport, notifier and catalog.
//!
//! ```ignore
//! let travel = Travel::new(transport, notifier, i18n);
//! travel.flights.fetch_today().await?;
//! for flight in travel.flights.items() { /* ... */ }
//! ```

pub mod messages;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use flightdeck_client::Transport;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::Notifier;

pub use store::{
    AirlineStore, AirplaneStore, BookingStore, ClassFlightStore, CouponStore, FlightStore,
    HomeStore, LoyaltyStore, PassengerStore, SeatStore,
};

/// All travel stores over one session.
pub struct Travel {
    pub airlines: AirlineStore,
    pub airplanes: AirplaneStore,
    pub flights: FlightStore,
    pub class_flights: ClassFlightStore,
    pub seats: SeatStore,
    pub bookings: BookingStore,
    pub passengers: PassengerStore,
    pub coupons: CouponStore,
    pub loyalty: LoyaltyStore,
    pub home: HomeStore,
}

impl Travel {
    /// Build every store and register the travel wording in `i18n`.
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        messages::register(&i18n);
        let t = &transport;
        let n = &notifier;
        let i = &i18n;
        Self {
            airlines: AirlineStore::new(t.clone(), n.clone(), i.clone()),
            airplanes: AirplaneStore::new(t.clone(), n.clone(), i.clone()),
            flights: FlightStore::new(t.clone(), n.clone(), i.clone()),
            class_flights: ClassFlightStore::new(t.clone(), n.clone(), i.clone()),
            seats: SeatStore::new(t.clone(), n.clone(), i.clone()),
            bookings: BookingStore::new(t.clone(), n.clone(), i.clone()),
            passengers: PassengerStore::new(t.clone(), n.clone(), i.clone()),
            coupons: CouponStore::new(t.clone(), n.clone(), i.clone()),
            loyalty: LoyaltyStore::new(t.clone(), n.clone(), i.clone()),
            home: HomeStore::new(t.clone(), n.clone(), i.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Harness;
    use chrono::NaiveDate;
    use flightdeck_client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn forbidden_response_clears_every_store() {
        let h = Harness::new();
        h.sign_in();
        h.stub
            .ok(Method::Get, "/airlines/all", &json!([{"id": "GA", "name": "Garuda", "country": "Indonesia"}]))
            .ok(Method::Get, "/airlines/countries", &json!(["Indonesia"]))
            .ok(Method::Get, "/bookings/statistics", &json!({"totalBookings": 2, "potentialRevenue": 3000000.0}))
            .ok(Method::Get, "/home", &json!({"activeFlightsToday": 1}))
            .error(Method::Get, "/flights/all", 403, "Forbidden");
        let travel = &h.travel;
        travel.airlines.fetch_all(&[]).await.unwrap();
        travel.airlines.fetch_countries().await.unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        travel.bookings.fetch_statistics(day, day).await.unwrap();
        travel.coupons.select(Some("C-1"));
        travel.home.load().await.unwrap();
        assert!(travel.bookings.statistics().is_some());

        travel.flights.fetch_all(&[]).await.unwrap_err();
        assert!(!h.session.is_authenticated());
        assert!(travel.airlines.is_empty());
        assert!(travel.airlines.countries().is_empty());
        assert!(travel.bookings.statistics().is_none());
        assert_eq!(travel.coupons.selected_id(), None);
        assert!(travel.home.statistics().is_none());
    }
}
