//! Fixtures for the store tests.

use std::sync::Arc;

use flightdeck_client::{AuthSession, StubBackend, Transport};
use flightdeck_flux::{I18nStore, StateStore};
use flightdeck_kv::MemoryStore;
use flightdeck_mirror::RecordingNotifier;

use crate::Travel;

pub struct Harness {
    pub stub: Arc<StubBackend>,
    pub session: Arc<AuthSession>,
    pub transport: Arc<Transport>,
    pub i18n: Arc<I18nStore>,
    pub notices: Arc<RecordingNotifier>,
    pub travel: Travel,
}

impl Harness {
    pub fn new() -> Self {
        let stub = Arc::new(StubBackend::new());
        let session = Arc::new(AuthSession::new(
            stub.clone(),
            "http://profile",
            Arc::new(MemoryStore::new()),
            Arc::new(StateStore::new()),
        ));
        let transport = Arc::new(Transport::new(stub.clone(), session.clone(), "http://api"));
        let i18n = Arc::new(I18nStore::new("en"));
        let notices = Arc::new(RecordingNotifier::new());
        let travel = Travel::new(transport.clone(), notices.clone(), i18n.clone());
        Self {
            stub,
            session,
            transport,
            i18n,
            notices,
            travel,
        }
    }

    pub fn sign_in(&self) {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &serde_json::json!({"sub": "admin", "role": "Superadmin"}),
            &jsonwebtoken::EncodingKey::from_secret(b"k"),
        )
        .unwrap();
        self.session.set_credential(&token).unwrap();
    }
}
