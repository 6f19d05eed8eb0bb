//! One store per travel entity family, each a thin layer over
//! [`DomainStore`](flightdeck_mirror::DomainStore) adding the family's
//! extra endpoints. Standard operations are reachable through `Deref`.

/// `Deref` a wrapper to its inner `DomainStore`.
macro_rules! deref_store {
    ($store:ident, $resource:ty) => {
        impl std::ops::Deref for $store {
            type Target = flightdeck_mirror::DomainStore<$resource>;

            fn deref(&self) -> &Self::Target {
                &self.store
            }
        }
    };
}

mod airline;
mod airplane;
mod booking;
mod class_flight;
mod coupon;
mod flight;
mod home;
mod loyalty;
mod passenger;
mod seat;

pub use airline::AirlineStore;
pub use airplane::AirplaneStore;
pub use booking::BookingStore;
pub use class_flight::ClassFlightStore;
pub use coupon::CouponStore;
pub use flight::FlightStore;
pub use home::HomeStore;
pub use loyalty::LoyaltyStore;
pub use passenger::PassengerStore;
pub use seat::SeatStore;

/// Borrow owned query pairs for `DomainStore::fetch_all`.
pub(crate) fn borrowed<'a>(pairs: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}
