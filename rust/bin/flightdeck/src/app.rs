//! Wiring of storage, session, transport and stores.

use std::sync::Arc;

use anyhow::Result;
use flightdeck_client::{AuthSession, HttpBackend, ReqwestBackend, Transport};
use flightdeck_core::ClientConfig;
use flightdeck_flux::{I18nStore, StateStore};
use flightdeck_kv::{KVStore, MemoryStore, RedbStore};
use flightdeck_mirror::{Notifier, TracingNotifier};
use flightdeck_social::PostStore;
use flightdeck_travel::Travel;
use tracing::debug;

pub struct App {
    pub session: Arc<AuthSession>,
    pub travel: Travel,
    pub posts: PostStore,
}

impl App {
    /// Open storage, restore any persisted session and build the stores.
    pub fn open(config: &ClientConfig) -> Result<Self> {
        let storage: Arc<dyn KVStore> = match &config.storage_path {
            Some(path) => {
                debug!("session storage at {}", path.display());
                Arc::new(RedbStore::open(path)?)
            }
            None => Arc::new(MemoryStore::new()),
        };

        let backend: Arc<dyn HttpBackend> = Arc::new(ReqwestBackend::new(config.timeout())?);
        let bus = Arc::new(StateStore::new());
        let session = Arc::new(AuthSession::new(
            backend.clone(),
            &config.profile_url,
            storage,
            bus,
        ));
        if session.restore() {
            debug!("restored session");
        }

        let transport = Arc::new(Transport::new(backend, session.clone(), &config.api_base_url));
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
        let i18n = Arc::new(I18nStore::new(&config.locale));

        let travel = Travel::new(transport.clone(), notifier.clone(), i18n.clone());
        let posts = flightdeck_social::posts(&transport, &config.social_url, notifier, i18n);

        Ok(Self {
            session,
            travel,
            posts,
        })
    }
}
