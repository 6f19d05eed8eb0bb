use std::sync::Arc;

use flightdeck_client::Transport;
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier};

use crate::model::{HomeStatistics, HOME_ID};

/// Read-only dashboard counters.
pub struct HomeStore {
    store: DomainStore<HomeStatistics>,
}

deref_store!(HomeStore, HomeStatistics);

impl HomeStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn load(&self) -> Result<HomeStatistics, ClientError> {
        self.store.fetch_one(&HOME_ID).await
    }

    pub fn statistics(&self) -> Option<HomeStatistics> {
        self.store.current()
    }
}
