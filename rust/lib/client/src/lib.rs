//! Session-aware HTTP plumbing.
//!
//! - [`HttpBackend`]: pluggable wire layer ([`ReqwestBackend`] in production,
//!   [`StubBackend`] in tests).
//! - [`AuthSession`]: owns the credential, its persistence and lifecycle.
//! - [`Transport`]: attaches the bearer credential to outgoing calls and
//!   terminates the session on 401/403.
//!
//! # Usage
//!
//! ```ignore
//! let backend: Arc<dyn HttpBackend> = Arc::new(ReqwestBackend::new(config.timeout())?);
//! let session = Arc::new(AuthSession::new(backend.clone(), &config.profile_url, storage, bus));
//! session.restore();
//! let transport = Arc::new(Transport::new(backend, session.clone(), &config.api_base_url));
//! let airlines: Vec<Airline> = transport.fetch(Call::get("/airlines/all")).await?;
//! ```

pub mod backend;
pub mod claims;
pub mod session;
pub mod stub;
pub mod transport;

pub use backend::{HttpBackend, HttpRequest, HttpResponse, Method, ReqwestBackend};
pub use claims::decode_identity;
pub use session::{
    AuthSession, Guard, Identity, LoginData, Session, SessionState, AUTH_STATE_PATH, LOGIN_PATH,
    LOYALTY_CUSTOMER_KEY, TOKEN_KEY, USER_KEY,
};
pub use stub::StubBackend;
pub use transport::{Call, Transport};
