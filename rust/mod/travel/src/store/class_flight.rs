use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier};

use crate::messages::event;
use crate::model::ClassFlight;

pub struct ClassFlightStore {
    store: DomainStore<ClassFlight>,
}

deref_store!(ClassFlightStore, ClassFlight);

impl ClassFlightStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    /// Classes of a flight with seats left.
    pub async fn fetch_available(&self, flight_id: &str) -> Result<Vec<ClassFlight>, ClientError> {
        let call = Call::get("/class-flights/available").query("flightId", flight_id);
        self.store.fetch_list(call, event::AVAILABLE_FAILED).await
    }
}
