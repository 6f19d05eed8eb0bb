use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use flightdeck_client::{Call, Transport, LOYALTY_CUSTOMER_KEY};
use flightdeck_core::ClientError;
use flightdeck_flux::{I18nStore, QueryParams};
use flightdeck_kv::KVStore;
use flightdeck_mirror::{event as common, DomainStore, Level, Notifier};
use tracing::warn;

use crate::messages::event;
use crate::model::{
    AddPointsRequest, Coupon, LoyaltyDashboard, LoyaltyPoints, PurchaseCouponRequest,
    PurchasedCoupon, RedeemCouponRequest, RedeemCouponResponse,
};

const API_KEY_HEADER: &str = "X-API-KEY";

/// Loyalty dashboard of the selected customer.
///
/// The selection is persisted and outlives the session; the dashboard
/// itself is the mirror's `current` and is dropped with the session.
/// Point and coupon actions reload the dashboard when they succeed.
pub struct LoyaltyStore {
    store: DomainStore<LoyaltyDashboard>,
    storage: Arc<dyn KVStore>,
    customer_id: RwLock<String>,
    action_loading: AtomicBool,
}

deref_store!(LoyaltyStore, LoyaltyDashboard);

impl LoyaltyStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        let storage = transport.session().storage().clone();
        let customer_id = match storage.get_string(LOYALTY_CUSTOMER_KEY) {
            Ok(id) => id.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to read selected customer: {}", e);
                String::new()
            }
        };
        Self {
            store: DomainStore::new(transport, notifier, i18n),
            storage,
            customer_id: RwLock::new(customer_id),
            action_loading: AtomicBool::new(false),
        }
    }

    // ── Selection ───────────────────────────────────────────────────

    pub fn customer_id(&self) -> String {
        self.customer_id.read().unwrap().clone()
    }

    pub fn has_customer_selection(&self) -> bool {
        !self.customer_id.read().unwrap().is_empty()
    }

    /// Select and persist a customer. An empty id clears the selection.
    pub fn set_customer_id(&self, customer_id: &str) {
        *self.customer_id.write().unwrap() = customer_id.to_string();
        let result = if customer_id.is_empty() {
            self.storage.delete(LOYALTY_CUSTOMER_KEY)
        } else {
            self.storage.set(LOYALTY_CUSTOMER_KEY, customer_id.as_bytes())
        };
        if let Err(e) = result {
            warn!("Failed to persist selected customer: {}", e);
        }
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub fn dashboard(&self) -> Option<LoyaltyDashboard> {
        self.store.current()
    }

    pub fn balance(&self) -> Option<LoyaltyPoints> {
        self.dashboard().map(|d| d.balance)
    }

    pub fn available_coupons(&self) -> Vec<Coupon> {
        self.dashboard()
            .map(|d| d.available_coupons)
            .unwrap_or_default()
    }

    pub fn purchased_coupons(&self) -> Vec<PurchasedCoupon> {
        self.dashboard()
            .map(|d| d.purchased_coupons)
            .unwrap_or_default()
    }

    pub fn action_loading(&self) -> bool {
        self.action_loading.load(Ordering::SeqCst)
    }

    /// Load the dashboard of `customer_id`, or of the selected customer.
    /// Without either nothing is requested and an error is recorded.
    pub async fn load_dashboard(&self, customer_id: Option<&str>) -> Result<LoyaltyDashboard, ClientError> {
        let target = match customer_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.customer_id(),
        };
        if target.is_empty() {
            return Err(self.store.reject(
                ClientError::MissingInput("Customer ID is required".to_string()),
                common::LOAD_ONE_FAILED,
            ));
        }
        let dashboard = self.store.fetch_one(&target).await?;
        self.set_customer_id(&target);
        Ok(dashboard)
    }

    // ── Actions ─────────────────────────────────────────────────────

    pub async fn add_points(
        &self,
        request: &AddPointsRequest,
        api_key: &str,
    ) -> Result<LoyaltyPoints, ClientError> {
        if api_key.is_empty() {
            return Err(self.store.reject(
                ClientError::MissingApiKey("API key is required to add points".to_string()),
                event::ADD_POINTS_FAILED,
            ));
        }
        let call = Call::post("/loyalty/points")
            .header(API_KEY_HEADER, api_key)
            .json(request);
        let points = self
            .action(event::ADD_POINTS_FAILED, self.store.transport().fetch(call))
            .await?;
        self.store.announce(Level::Success, event::POINTS_ADDED);
        self.load_dashboard(Some(&request.customer_id)).await?;
        Ok(points)
    }

    pub async fn purchase_coupon(&self, request: &PurchaseCouponRequest) -> Result<PurchasedCoupon, ClientError> {
        let call = Call::post("/loyalty/coupons/purchase").json(request);
        let purchased = self
            .action(event::PURCHASE_FAILED, self.store.transport().fetch(call))
            .await?;
        self.store.announce(Level::Success, event::COUPON_PURCHASED);
        self.load_dashboard(Some(&request.customer_id)).await?;
        Ok(purchased)
    }

    /// Redeem a purchased coupon by code. An invalid code is a warning,
    /// not an error; the dashboard is reloaded either way.
    pub async fn redeem_coupon(
        &self,
        request: &RedeemCouponRequest,
        api_key: &str,
    ) -> Result<RedeemCouponResponse, ClientError> {
        if api_key.is_empty() {
            return Err(self.store.reject(
                ClientError::MissingApiKey("API key is required to redeem coupons".to_string()),
                event::REDEEM_FAILED,
            ));
        }
        let call = Call::post("/loyalty/coupons/redeem")
            .header(API_KEY_HEADER, api_key)
            .json(request);
        let response: RedeemCouponResponse = self
            .action(event::REDEEM_FAILED, self.store.transport().fetch(call))
            .await?;
        let params = QueryParams::empty().with("code", response.code.clone());
        if response.valid {
            self.store
                .announce_with(Level::Success, event::COUPON_REDEEMED, params);
        } else {
            self.store
                .announce_with(Level::Warning, event::COUPON_INVALID, params);
        }
        self.load_dashboard(Some(&request.customer_id)).await?;
        Ok(response)
    }

    /// Ask the server to seed demo loyalty data. Nothing is mirrored.
    pub async fn generate_data(&self) -> Result<(), ClientError> {
        let call = Call::post("/generate-data");
        self.action(event::GENERATE_FAILED, self.store.transport().execute(call))
            .await
    }

    async fn action<T, W>(&self, failure_event: &str, work: W) -> Result<T, ClientError>
    where
        W: Future<Output = Result<T, ClientError>>,
    {
        self.action_loading.store(true, Ordering::SeqCst);
        let result = work.await;
        self.action_loading.store(false, Ordering::SeqCst);
        result.map_err(|err| self.store.reject(err, failure_event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use flightdeck_client::Method;
    use serde_json::json;

    fn dashboard(customer: &str, points: i64) -> serde_json::Value {
        json!({
            "customerId": customer,
            "balance": {"customerId": customer, "points": points},
            "purchasedCoupons": [],
            "availableCoupons": [{"id": "C-1", "name": "Ten", "points": 100, "percentOff": 10.0}]
        })
    }

    #[tokio::test]
    async fn missing_customer_sends_nothing() {
        let h = Harness::new();
        let store = &h.travel.loyalty;
        let err = store.load_dashboard(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Customer ID is required");
        assert_eq!(store.error().as_deref(), Some("Customer ID is required"));
        assert_eq!(h.stub.request_count(), 0);
        assert_eq!(h.notices.count(Level::Error), 1);
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn load_persists_selection() {
        let h = Harness::new();
        h.stub
            .ok(Method::Get, "/loyalty/customers/CUST-1/dashboard", &dashboard("CUST-1", 250));
        let store = &h.travel.loyalty;
        store.load_dashboard(Some("CUST-1")).await.unwrap();

        assert_eq!(store.balance().unwrap().points, 250);
        assert_eq!(store.available_coupons().len(), 1);
        assert_eq!(store.customer_id(), "CUST-1");
        assert_eq!(
            h.session.storage().get_string(LOYALTY_CUSTOMER_KEY).unwrap().as_deref(),
            Some("CUST-1")
        );
    }

    #[tokio::test]
    async fn selection_read_back_from_storage() {
        let h = Harness::new();
        h.session
            .storage()
            .set(LOYALTY_CUSTOMER_KEY, b"CUST-7")
            .unwrap();
        let store = LoyaltyStore::new(h.transport.clone(), h.notices.clone(), h.i18n.clone());
        assert_eq!(store.customer_id(), "CUST-7");

        store.set_customer_id("");
        assert!(!store.has_customer_selection());
        assert!(h.session.storage().get(LOYALTY_CUSTOMER_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn add_points_requires_api_key() {
        let h = Harness::new();
        let request = AddPointsRequest {
            customer_id: "CUST-1".into(),
            points: 50,
            reference: None,
        };
        let err = h.travel.loyalty.add_points(&request, "").await.unwrap_err();
        assert_eq!(err.to_string(), "API key is required to add points");
        assert_eq!(h.stub.request_count(), 0);
        assert_eq!(h.notices.last().unwrap().message, "API key is required to add points");
    }

    #[tokio::test]
    async fn redeem_requires_api_key() {
        let h = Harness::new();
        let request = RedeemCouponRequest {
            customer_id: "CUST-1".into(),
            code: "SAVE10".into(),
        };
        let store = &h.travel.loyalty;
        let err = store.redeem_coupon(&request, "").await.unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey(_)));
        assert_eq!(err.to_string(), "API key is required to redeem coupons");
        assert_eq!(h.stub.request_count(), 0);
        assert_eq!(h.notices.count(Level::Error), 1);
        assert_eq!(h.notices.notices().len(), 1);
        assert_eq!(store.error().as_deref(), Some("API key is required to redeem coupons"));
    }

    #[tokio::test]
    async fn add_points_sends_key_and_reloads() {
        let h = Harness::new();
        h.stub
            .ok(Method::Post, "/loyalty/points", &json!({"customerId": "CUST-1", "points": 300}))
            .ok(Method::Get, "/loyalty/customers/CUST-1/dashboard", &dashboard("CUST-1", 300));
        let request = AddPointsRequest {
            customer_id: "CUST-1".into(),
            points: 50,
            reference: Some("trip".into()),
        };
        let store = &h.travel.loyalty;
        store.add_points(&request, "secret").await.unwrap();

        let sent = &h.stub.requests()[0];
        assert_eq!(sent.header("x-api-key"), Some("secret"));
        assert_eq!(store.balance().unwrap().points, 300);
        assert!(!store.action_loading());
        assert_eq!(h.notices.notices()[0].message, "Points added successfully");
    }

    #[tokio::test]
    async fn redeem_reports_validity() {
        let h = Harness::new();
        let redeemed = |valid: bool| {
            json!({"code": "SAVE10", "customerId": "CUST-1", "couponId": "C-1", "percentOff": 10.0, "valid": valid})
        };
        h.stub
            .ok(Method::Post, "/loyalty/coupons/redeem", &redeemed(true))
            .ok(Method::Get, "/loyalty/customers/CUST-1/dashboard", &dashboard("CUST-1", 0))
            .ok(Method::Post, "/loyalty/coupons/redeem", &redeemed(false))
            .ok(Method::Get, "/loyalty/customers/CUST-1/dashboard", &dashboard("CUST-1", 0));
        let request = RedeemCouponRequest {
            customer_id: "CUST-1".into(),
            code: "SAVE10".into(),
        };
        let store = &h.travel.loyalty;

        store.redeem_coupon(&request, "secret").await.unwrap();
        let notice = h.notices.take().remove(0);
        assert_eq!(notice.level, Level::Success);
        assert_eq!(notice.message, "Coupon SAVE10 redeemed!");

        store.redeem_coupon(&request, "secret").await.unwrap();
        let notice = h.notices.take().remove(0);
        assert_eq!(notice.level, Level::Warning);
        assert_eq!(notice.message, "Coupon SAVE10 is not valid");
        assert_eq!(h.stub.pending(), 0);
    }

    #[tokio::test]
    async fn failed_purchase_recorded_without_reload() {
        let h = Harness::new();
        h.stub
            .error(Method::Post, "/loyalty/coupons/purchase", 400, "Insufficient points");
        let request = PurchaseCouponRequest {
            customer_id: "CUST-1".into(),
            coupon_id: "C-1".into(),
        };
        let store = &h.travel.loyalty;
        let err = store.purchase_coupon(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Insufficient points");
        assert_eq!(store.error().as_deref(), Some("Insufficient points"));
        assert_eq!(h.notices.last().unwrap().message, "Insufficient points");
        assert_eq!(h.stub.request_count(), 1);
        assert!(!store.action_loading());
    }

    #[tokio::test]
    async fn forbidden_purchase_keeps_error_after_sign_out() {
        let h = Harness::new();
        h.sign_in();
        h.stub
            .error(Method::Post, "/loyalty/coupons/purchase", 403, "Forbidden");
        let request = PurchaseCouponRequest {
            customer_id: "CUST-1".into(),
            coupon_id: "C-1".into(),
        };
        let store = &h.travel.loyalty;
        store.purchase_coupon(&request).await.unwrap_err();
        assert!(!h.session.is_authenticated());
        assert_eq!(store.error().as_deref(), Some("Forbidden"));
        assert!(!store.action_loading());
    }

    #[tokio::test]
    async fn generate_data_toggles_action_loading() {
        let h = Harness::new();
        h.stub.ok(Method::Post, "/generate-data", &"Data generated");
        let store = &h.travel.loyalty;
        store.generate_data().await.unwrap();
        assert!(h.stub.last_request().unwrap().url.ends_with("/generate-data"));
        assert!(!store.action_loading());
        assert!(h.notices.notices().is_empty());
        assert!(store.dashboard().is_none());
    }
}
