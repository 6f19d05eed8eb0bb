//! Travel wording that differs from the generic templates.

use std::sync::Arc;

use flightdeck_flux::{I18nHandler, I18nStore, StaticMessages};

/// Events specific to travel stores.
pub mod event {
    pub const SEARCH_FAILED: &str = "search_failed";
    pub const COUNTRIES_FAILED: &str = "countries_failed";
    pub const ACTIVATED: &str = "activated";
    pub const ACTIVATE_FAILED: &str = "activate_failed";
    pub const TODAY_FAILED: &str = "today_failed";
    pub const UPCOMING_FAILED: &str = "upcoming_failed";
    pub const AVAILABLE_FAILED: &str = "available_failed";
    pub const ASSIGNED: &str = "assigned";
    pub const ASSIGN_FAILED: &str = "assign_failed";
    pub const RELEASED: &str = "released";
    pub const RELEASE_FAILED: &str = "release_failed";
    pub const STATISTICS_FAILED: &str = "statistics_failed";
    pub const POINTS_ADDED: &str = "points_added";
    pub const ADD_POINTS_FAILED: &str = "add_points_failed";
    pub const COUPON_PURCHASED: &str = "coupon_purchased";
    pub const PURCHASE_FAILED: &str = "purchase_failed";
    pub const COUPON_REDEEMED: &str = "coupon_redeemed";
    pub const COUPON_INVALID: &str = "coupon_invalid";
    pub const REDEEM_FAILED: &str = "redeem_failed";
    pub const GENERATE_FAILED: &str = "generate_failed";
}

/// Collections whose notices this catalog serves.
pub const COLLECTIONS: &[&str] = &[
    "airlines",
    "airplanes",
    "flights",
    "class-flights",
    "seats",
    "bookings",
    "passengers",
    "coupons",
    "loyalty",
    "home",
];

pub fn catalog() -> StaticMessages {
    StaticMessages::new()
        // airlines
        .add("notice/airlines/search_failed", "en", "Error searching airlines: {message}")
        .add("notice/airlines/search_failed", "id", "Error saat mencari maskapai: {message}")
        .add("notice/airlines/countries_failed", "en", "Error loading countries: {message}")
        .add("notice/airlines/countries_failed", "id", "Error saat memuat negara: {message}")
        // airplanes
        .add("notice/airplanes/created", "en", "Airplane registered successfully")
        .add("notice/airplanes/created", "id", "Pesawat berhasil didaftarkan")
        .add("notice/airplanes/create_failed", "en", "Error registering airplane: {message}")
        .add("notice/airplanes/deleted", "en", "Airplane deactivated successfully")
        .add("notice/airplanes/deleted", "id", "Pesawat berhasil dinonaktifkan")
        .add("notice/airplanes/delete_failed", "en", "Error deactivating airplane: {message}")
        .add("notice/airplanes/activated", "en", "Airplane activated successfully")
        .add("notice/airplanes/activated", "id", "Pesawat berhasil diaktifkan")
        .add("notice/airplanes/activate_failed", "en", "Error activating airplane: {message}")
        // flights
        .add("notice/flights/deleted", "en", "Flight cancelled successfully")
        .add("notice/flights/deleted", "id", "Penerbangan berhasil dibatalkan")
        .add("notice/flights/delete_failed", "en", "Error cancelling flight: {message}")
        .add("notice/flights/today_failed", "en", "Error loading today's flights: {message}")
        .add("notice/flights/upcoming_failed", "en", "Error loading upcoming flights: {message}")
        .add("notice/flights/available_failed", "en", "Error loading available flights: {message}")
        // class flights
        .add(
            "notice/class-flights/available_failed",
            "en",
            "Error loading available class flights: {message}",
        )
        // seats
        .add("notice/seats/available_failed", "en", "Error loading available seats: {message}")
        .add("notice/seats/assigned", "en", "Seat assigned successfully")
        .add("notice/seats/assign_failed", "en", "Error assigning seat: {message}")
        .add("notice/seats/released", "en", "Seat released successfully")
        .add("notice/seats/release_failed", "en", "Error releasing seat: {message}")
        // bookings
        .add("notice/bookings/deleted", "en", "Booking cancelled successfully")
        .add("notice/bookings/deleted", "id", "Pemesanan berhasil dibatalkan")
        .add("notice/bookings/delete_failed", "en", "Error cancelling booking: {message}")
        .add("notice/bookings/statistics_failed", "en", "Error loading statistics: {message}")
        // coupons: failures show the server message as is
        .add("notice/coupons/load_failed", "en", "{message}")
        .add("notice/coupons/create_failed", "en", "{message}")
        .add("notice/coupons/update_failed", "en", "{message}")
        .add("notice/coupons/delete_failed", "en", "{message}")
        .add("notice/coupons/available_failed", "en", "{message}")
        // loyalty
        .add("notice/loyalty/load_one_failed", "en", "{message}")
        .add("notice/loyalty/points_added", "en", "Points added successfully")
        .add("notice/loyalty/points_added", "id", "Poin berhasil ditambahkan")
        .add("notice/loyalty/add_points_failed", "en", "{message}")
        .add("notice/loyalty/coupon_purchased", "en", "Coupon purchased successfully")
        .add("notice/loyalty/coupon_purchased", "id", "Kupon berhasil dibeli")
        .add("notice/loyalty/purchase_failed", "en", "{message}")
        .add("notice/loyalty/coupon_redeemed", "en", "Coupon {code} redeemed!")
        .add("notice/loyalty/coupon_redeemed", "id", "Kupon {code} berhasil ditukar!")
        .add("notice/loyalty/coupon_invalid", "en", "Coupon {code} is not valid")
        .add("notice/loyalty/coupon_invalid", "id", "Kupon {code} tidak valid")
        .add("notice/loyalty/redeem_failed", "en", "{message}")
        .add("notice/loyalty/generate_failed", "en", "{message}")
}

/// Register the travel catalog for every travel collection.
pub fn register(i18n: &I18nStore) {
    let catalog: Arc<dyn I18nHandler> = Arc::new(catalog());
    for collection in COLLECTIONS {
        i18n.handle(&format!("notice/{}/#", collection), catalog.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_flux::QueryParams;

    #[test]
    fn registered_for_every_collection() {
        let i18n = I18nStore::new("en");
        register(&i18n);
        assert_eq!(i18n.get("notice/flights/deleted"), "Flight cancelled successfully");
        assert_eq!(
            i18n.get_with(
                "notice/loyalty/coupon_redeemed",
                &QueryParams::empty().with("code", "SAVE10")
            ),
            "Coupon SAVE10 redeemed!"
        );
        i18n.set_locale("id");
        assert_eq!(i18n.get("notice/airplanes/deleted"), "Pesawat berhasil dinonaktifkan");
        // No Indonesian entry, English wins.
        assert_eq!(i18n.get("notice/seats/assigned"), "Seat assigned successfully");
    }
}
