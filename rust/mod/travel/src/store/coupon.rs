use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier, Scoped};

use crate::messages::event;
use crate::model::{Coupon, CouponInput};

/// Coupon catalog administration, newest first, with one selected coupon.
pub struct CouponStore {
    store: DomainStore<Coupon>,
    selected_id: Scoped<Option<String>>,
}

deref_store!(CouponStore, Coupon);

impl CouponStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            selected_id: Scoped::new(transport.session().clone()),
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub fn select(&self, id: Option<&str>) {
        self.selected_id.set(id.map(str::to_string));
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected_id.get()
    }

    /// The selected coupon, if it is still mirrored.
    pub fn selected(&self) -> Option<Coupon> {
        let id = self.selected_id()?;
        self.store.get(&id)
    }

    /// Create and prepend.
    pub async fn create(&self, input: &CouponInput) -> Result<Coupon, ClientError> {
        self.store.create_front(input).await
    }

    /// Delete, dropping the selection if it pointed at the coupon.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let id = id.to_string();
        self.store.delete(&id).await?;
        self.selected_id.update(|selected| {
            if selected.as_deref() == Some(id.as_str()) {
                *selected = None;
            }
        });
        Ok(())
    }

    /// Coupons customers can currently buy.
    pub async fn fetch_available(&self) -> Result<Vec<Coupon>, ClientError> {
        self.store
            .fetch_list(Call::get("/loyalty/coupons/available"), event::AVAILABLE_FAILED)
            .await
    }
}
