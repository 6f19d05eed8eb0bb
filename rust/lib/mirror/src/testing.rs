//! Fixtures shared by the engine tests.

use std::sync::Arc;

use flightdeck_client::{AuthSession, Method, StubBackend, Transport};
use flightdeck_flux::{I18nStore, StateStore};
use flightdeck_kv::MemoryStore;
use serde::{Deserialize, Serialize};

use crate::notifier::RecordingNotifier;
use crate::resource::{Deletion, Resource, Routes};
use crate::store::DomainStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub name: String,
}

impl Resource for Widget {
    type Id = String;
    const COLLECTION: &'static str = "widgets";
    const LABEL: &'static str = "widget";
    const LABEL_PLURAL: &'static str = "widgets";

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gadget {
    pub id: String,
    pub is_deleted: bool,
}

impl Resource for Gadget {
    type Id = String;
    const COLLECTION: &'static str = "gadgets";
    const LABEL: &'static str = "gadget";
    const LABEL_PLURAL: &'static str = "gadgets";
    const DELETION: Deletion = Deletion::Soft;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn routes() -> Routes {
        Routes::standard(Self::COLLECTION).delete_via(Method::Post)
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

pub struct Harness {
    pub stub: Arc<StubBackend>,
    pub bus: Arc<StateStore>,
    pub i18n: Arc<I18nStore>,
    pub session: Arc<AuthSession>,
    pub transport: Arc<Transport>,
    pub notices: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new() -> Self {
        let stub = Arc::new(StubBackend::new());
        let bus = Arc::new(StateStore::new());
        let session = Arc::new(AuthSession::new(
            stub.clone(),
            "http://profile",
            Arc::new(MemoryStore::new()),
            bus.clone(),
        ));
        let transport = Arc::new(Transport::new(stub.clone(), session.clone(), "http://api"));
        Self {
            stub,
            bus,
            i18n: Arc::new(I18nStore::new("en")),
            session,
            transport,
            notices: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn store<R: Resource>(&self) -> DomainStore<R> {
        DomainStore::new(self.transport.clone(), self.notices.clone(), self.i18n.clone())
    }

    pub fn sign_in(&self) {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &serde_json::json!({"sub": "tester", "role": "Superadmin"}),
            &jsonwebtoken::EncodingKey::from_secret(b"k"),
        )
        .unwrap();
        self.session.set_credential(&token).unwrap();
    }
}
