use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Level, Notifier, Routes};

use super::borrowed;
use crate::messages::event;
use crate::model::{Airplane, AirplaneQuery};

/// Airplanes are never removed, only deactivated and reactivated.
pub struct AirplaneStore {
    store: DomainStore<Airplane>,
}

deref_store!(AirplaneStore, Airplane);

impl AirplaneStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn fetch_filtered(&self, query: &AirplaneQuery) -> Result<Vec<Airplane>, ClientError> {
        self.store.fetch_all(&borrowed(&query.pairs())).await
    }

    /// Soft delete: the airplane stays listed with `is_deleted` set.
    pub async fn deactivate(&self, id: &str) -> Result<(), ClientError> {
        self.store.delete(&id.to_string()).await
    }

    pub async fn activate(&self, id: &str) -> Result<(), ClientError> {
        let id = id.to_string();
        let call = Call::post(Routes::resolve("/airplanes/{id}/activate", &id));
        self.store
            .perform_unit(call, event::ACTIVATE_FAILED, |m| {
                m.mark_deleted(&id, false);
            })
            .await?;
        self.store.announce(Level::Success, event::ACTIVATED);
        Ok(())
    }
}
