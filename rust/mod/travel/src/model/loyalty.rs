use flightdeck_mirror::{Resource, Routes};
use serde::{Deserialize, Serialize};

/// Coupon template customers can buy with points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points: i64,
    pub percent_off: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
}

impl Resource for Coupon {
    type Id = String;
    const COLLECTION: &'static str = "coupons";
    const LABEL: &'static str = "coupon";
    const LABEL_PLURAL: &'static str = "coupons";

    fn id(&self) -> String {
        self.id.clone()
    }

    fn routes() -> Routes {
        Routes::rest(Self::COLLECTION)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points: i64,
    pub percent_off: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyPoints {
    pub customer_id: String,
    pub points: i64,
}

/// A coupon owned by a customer, identified by its redemption code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedCoupon {
    pub id: String,
    pub code: String,
    pub customer_id: String,
    pub coupon_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_date: Option<String>,
}

impl PurchasedCoupon {
    pub fn is_used(&self) -> bool {
        self.used_date.is_some()
    }
}

/// Everything the loyalty screen shows for one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyDashboard {
    pub customer_id: String,
    pub balance: LoyaltyPoints,
    #[serde(default)]
    pub purchased_coupons: Vec<PurchasedCoupon>,
    #[serde(default)]
    pub available_coupons: Vec<Coupon>,
    #[serde(default)]
    pub total_purchased_coupons: u32,
    #[serde(default)]
    pub active_coupons: u32,
    #[serde(default)]
    pub redeemed_coupons: u32,
    #[serde(default)]
    pub available_coupon_count: u32,
}

impl Resource for LoyaltyDashboard {
    type Id = String;
    const COLLECTION: &'static str = "loyalty";
    const LABEL: &'static str = "loyalty dashboard";
    const LABEL_PLURAL: &'static str = "loyalty dashboards";

    fn id(&self) -> String {
        self.customer_id.clone()
    }

    fn routes() -> Routes {
        let mut routes = Routes::standard(Self::COLLECTION);
        routes.item = "/loyalty/customers/{id}/dashboard".to_string();
        routes
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPointsRequest {
    pub customer_id: String,
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCouponRequest {
    pub customer_id: String,
    pub coupon_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCouponRequest {
    pub customer_id: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemCouponResponse {
    pub code: String,
    pub customer_id: String,
    pub coupon_id: String,
    pub percent_off: f64,
    pub valid: bool,
}
