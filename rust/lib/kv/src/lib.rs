//! Client-local key/value persistence.
//!
//! The client keeps a few small values between runs (session credential,
//! serialized identity, last-used loyalty customer). [`KVStore`] is the seam;
//! [`RedbStore`] persists to disk and [`MemoryStore`] lives only as long as
//! the process.

pub mod error;
pub mod memory;
pub mod redb;
pub mod traits;

pub use error::KVError;
pub use memory::MemoryStore;
pub use redb::RedbStore;
pub use traits::KVStore;
