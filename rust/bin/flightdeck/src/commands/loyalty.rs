//! Loyalty dashboard and customer selection.

use anyhow::Result;

use super::print_json;
use crate::app::App;

pub async fn dashboard(app: &App, customer: Option<&str>) -> Result<()> {
    let dashboard = app.travel.loyalty.load_dashboard(customer).await?;
    print_json(&dashboard)
}

pub fn select(app: &App, customer: &str) {
    app.travel.loyalty.set_customer_id(customer);
    if customer.is_empty() {
        println!("Customer selection cleared.");
    } else {
        println!("Selected customer {}.", customer);
    }
}
