//! Flux: path-addressed client state with pub/sub.
//!
//! Stores keep their observable state here instead of relying on a UI
//! framework's reactivity. Views read a path, or subscribe to a pattern and
//! re-render when notified.
//!
//! # Path Addressing
//!
//! Paths are `/`-separated:
//! - Session: `auth/state`
//! - Mirrors: `airlines/mirror`, `bookings/mirror`
//! - Loyalty dashboard: `loyalty/mirror` (its `current`)
//!
//! # Patterns
//!
//! Subscriptions and message handlers use MQTT-style wildcards:
//! - Exact: `auth/state`
//! - Single-level: `+/mirror` matches every store's mirror
//! - Multi-level: `loyalty/#` matches everything under `loyalty/`
//! - All: `#`
//!
//! # Example
//!
//! ```ignore
//! use flightdeck_flux::StateStore;
//!
//! let store = StateStore::new();
//! store.subscribe("+/mirror", |path, _value| {
//!     println!("{} changed", path);
//! });
//! store.set("airlines/mirror", snapshot);
//! ```

pub mod i18n;
pub mod pattern;
pub mod store;
pub mod value;

pub use i18n::{I18nHandler, I18nStore, QueryParams, StaticMessages};
pub use store::{ChangeHandler, StateStore};
pub use value::StateValue;
