//! Session-aware mirrors of server-owned collections.
//!
//! A [`DomainStore`] holds the local copy of one entity family, applies
//! mutations around remote calls, records failures in a single error slot
//! and announces outcomes through a [`Notifier`]. Stores drop their mirror
//! on the first access after the session changed.

pub mod messages;
pub mod notifier;
pub mod resource;
pub mod scoped;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use messages::event;
pub use notifier::{Level, Notice, Notifier, RecordingNotifier, TracingNotifier};
pub use resource::{Deletion, Resource, Routes};
pub use scoped::Scoped;
pub use store::{DomainStore, MirrorSnapshot};
