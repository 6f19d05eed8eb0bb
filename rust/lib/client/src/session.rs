//! Authentication session.
//!
//! One [`AuthSession`] per process, shared by `Arc` with the transport and
//! every store. Only the session mutates its state:
//!
//! ```text
//! Anonymous ──login / set_credential / restore──▶ Authenticated
//!     ▲                                               │
//!     └──────────────────── terminate ────────────────┘
//! ```
//!
//! Every transition bumps [`AuthSession::epoch`] and publishes the new
//! [`SessionState`] at [`AUTH_STATE_PATH`]. Stores compare the epoch on
//! access and drop their mirrors when it moved.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use flightdeck_core::{body_message, ClientError, Envelope};
use flightdeck_flux::StateStore;
use flightdeck_kv::KVStore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::backend::{HttpBackend, HttpRequest, Method};
use crate::claims::decode_identity;

/// Persisted credential key.
pub const TOKEN_KEY: &str = "token";
/// Persisted identity key (JSON).
pub const USER_KEY: &str = "user";
/// Persisted loyalty customer selection. Owned by the loyalty store, kept
/// here so every persisted key is listed in one place.
pub const LOYALTY_CUSTOMER_KEY: &str = "loyalty.selectedCustomerId";

/// Bus path carrying the current [`SessionState`].
pub const AUTH_STATE_PATH: &str = "auth/state";
/// Redirect target for guarded routes.
pub const LOGIN_PATH: &str = "/login";

// ── Types ───────────────────────────────────────────────────────────

/// Who the credential belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Account balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saldo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
}

/// `data` of the login response: the credential plus the profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub identity: Identity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub credential: String,
    pub identity: Identity,
}

/// Identity is present iff the credential is present and decoded, so the
/// two only ever travel together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// Route guard outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    Redirect(String),
}

// ── AuthSession ─────────────────────────────────────────────────────

pub struct AuthSession {
    backend: Arc<dyn HttpBackend>,
    profile_url: String,
    storage: Arc<dyn KVStore>,
    bus: Arc<StateStore>,
    state: RwLock<SessionState>,
    epoch: AtomicU64,
}

impl AuthSession {
    /// Creates an anonymous session. Call [`restore`](Self::restore) to pick
    /// up a persisted credential.
    pub fn new(
        backend: Arc<dyn HttpBackend>,
        profile_url: &str,
        storage: Arc<dyn KVStore>,
        bus: Arc<StateStore>,
    ) -> Self {
        Self {
            backend,
            profile_url: profile_url.trim_end_matches('/').to_string(),
            storage,
            bus,
            state: RwLock::new(SessionState::Anonymous),
            epoch: AtomicU64::new(0),
        }
    }

    /// Exchange username and password for a credential.
    ///
    /// The response must carry a non-empty `token` and `role`; otherwise the
    /// session ends up anonymous and `MalformedSessionResponse` is returned.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Envelope<LoginData>, ClientError> {
        let mut request = HttpRequest::new(Method::Post, format!("{}/auth/login", self.profile_url));
        request.body = Some(serde_json::json!({
            "username": username,
            "password": password,
        }));

        let resp = self
            .backend
            .send(request)
            .await
            .map_err(|f| ClientError::from_failure(&f))?;

        if !resp.is_success() {
            let message = body_message(&resp.body).unwrap_or_else(|| "Login failed".to_string());
            warn!("Login rejected ({}): {}", resp.status, message);
            return Err(ClientError::Transport {
                status: Some(resp.status),
                message,
            });
        }

        let envelope: Envelope<Option<LoginData>> = match serde_json::from_slice(&resp.body) {
            Ok(env) => env,
            Err(e) => {
                return Err(self.reject_login(format!("Invalid login response format: {}", e)));
            }
        };
        let data = match envelope.data {
            Some(data) if !data.token.trim().is_empty() => data,
            _ => {
                return Err(self.reject_login(
                    "Invalid login response format: missing token".to_string(),
                ))
            }
        };
        if data.identity.role.trim().is_empty() {
            return Err(self.reject_login("User role is missing from response".to_string()));
        }

        self.persist(&data.token, &data.identity);
        self.transition(SessionState::Authenticated(Session {
            credential: data.token.clone(),
            identity: data.identity.clone(),
        }));
        info!(
            "Logged in as {} ({})",
            data.identity.username, data.identity.role
        );

        Ok(Envelope {
            status: envelope.status,
            message: envelope.message,
            timestamp: envelope.timestamp,
            data,
        })
    }

    /// Adopt an externally obtained credential, deriving the identity from
    /// its claims. Decode failure terminates the session.
    pub fn set_credential(&self, token: &str) -> Result<Identity, ClientError> {
        let identity = match decode_identity(token) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Rejecting credential: {}", e);
                self.terminate();
                return Err(e);
            }
        };

        self.persist(token, &identity);
        self.transition(SessionState::Authenticated(Session {
            credential: token.to_string(),
            identity: identity.clone(),
        }));
        info!("Credential set for {} ({})", identity.username, identity.role);
        Ok(identity)
    }

    /// Drop the credential and identity, in memory and in storage.
    /// Safe to call any number of times.
    pub fn terminate(&self) {
        if let Err(e) = self.storage.batch_delete(&[TOKEN_KEY, USER_KEY]) {
            warn!("Failed to clear persisted session: {}", e);
        }
        if self.is_authenticated() {
            self.transition(SessionState::Anonymous);
            info!("Session terminated");
        }
    }

    /// Load the persisted session at startup.
    ///
    /// The stored profile is used when well-formed, otherwise the identity
    /// is decoded from the stored credential. Anything unreadable leaves
    /// the session anonymous. Returns whether a session was restored.
    pub fn restore(&self) -> bool {
        let token = match self.read_key(TOKEN_KEY) {
            Some(token) if !token.trim().is_empty() => token,
            _ => {
                self.terminate();
                return false;
            }
        };

        let stored = self
            .read_key(USER_KEY)
            .filter(|raw| raw != "undefined")
            .and_then(|raw| match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => Some(identity),
                Err(e) => {
                    warn!("Ignoring malformed persisted user: {}", e);
                    None
                }
            })
            .filter(|identity| !identity.role.trim().is_empty());

        let identity = match stored.or_else(|| decode_identity(&token).ok()) {
            Some(identity) => identity,
            None => {
                warn!("Persisted credential has no usable identity, starting anonymous");
                self.terminate();
                return false;
            }
        };

        info!("Restored session for {} ({})", identity.username, identity.role);
        self.transition(SessionState::Authenticated(Session {
            credential: token,
            identity,
        }));
        true
    }

    // ── Queries ─────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    pub fn credential(&self) -> Option<String> {
        match &*self.state.read().unwrap() {
            SessionState::Authenticated(s) => Some(s.credential.clone()),
            SessionState::Anonymous => None,
        }
    }

    pub fn identity(&self) -> Option<Identity> {
        match &*self.state.read().unwrap() {
            SessionState::Authenticated(s) => Some(s.identity.clone()),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.read().unwrap(), SessionState::Authenticated(_))
    }

    /// True when an identity is present and its role is one of `roles`.
    pub fn has_role(&self, roles: &[&str]) -> bool {
        match &*self.state.read().unwrap() {
            SessionState::Authenticated(s) => roles.contains(&s.identity.role.as_str()),
            SessionState::Anonymous => false,
        }
    }

    /// Counter bumped on every session transition.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Decide whether `path` may be shown.
    pub fn guard(&self, path: &str, public_paths: &[&str]) -> Guard {
        if public_paths.contains(&path) || self.is_authenticated() {
            Guard::Allow
        } else {
            Guard::Redirect(LOGIN_PATH.to_string())
        }
    }

    /// Client-local storage shared with the stores.
    pub fn storage(&self) -> &Arc<dyn KVStore> {
        &self.storage
    }

    pub fn bus(&self) -> &Arc<StateStore> {
        &self.bus
    }

    // ── Internals ───────────────────────────────────────────────────

    fn reject_login(&self, message: String) -> ClientError {
        warn!("{}", message);
        self.terminate();
        ClientError::MalformedSessionResponse(message)
    }

    fn transition(&self, next: SessionState) {
        {
            let mut state = self.state.write().unwrap();
            *state = next.clone();
        }
        self.epoch.fetch_add(1, Ordering::SeqCst);
        // Subscribers run outside the lock and may read the session.
        self.bus.set(AUTH_STATE_PATH, next);
    }

    fn persist(&self, token: &str, identity: &Identity) {
        let user = match serde_json::to_vec(identity) {
            Ok(user) => user,
            Err(e) => {
                warn!("Failed to encode user for storage: {}", e);
                return;
            }
        };
        if let Err(e) = self
            .storage
            .batch_set(&[(TOKEN_KEY, token.as_bytes()), (USER_KEY, &user)])
        {
            warn!("Failed to persist session: {}", e);
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.storage.get_string(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read persisted {}: {}", key, e);
                None
            }
        }
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}
