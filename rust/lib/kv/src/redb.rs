use std::fmt::Display;
use std::path::Path;

use redb::{Database, ReadableTable, Table, TableDefinition};
use tracing::debug;

use crate::error::KVError;
use crate::traits::KVStore;

const CLIENT_STATE: TableDefinition<&str, &[u8]> = TableDefinition::new("client_state");

fn storage<E: Display>(e: E) -> KVError {
    KVError::Storage(e.to_string())
}

/// Durable KVStore backed by a single redb file.
///
/// Every write runs in its own transaction, so `batch_set` / `batch_delete`
/// are atomic: a session is never persisted with a token but no identity.
pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create the database file, creating parent directories as needed.
    pub fn open(path: &Path) -> Result<Self, KVError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(storage)?;
            }
        }
        let db = Database::create(path).map_err(storage)?;
        let store = Self { db };
        // Materialize the table so the first read does not fail.
        store.write(|_| Ok(()))?;
        debug!(path = %path.display(), "client state opened");
        Ok(store)
    }

    fn write<F>(&self, apply: F) -> Result<(), KVError>
    where
        F: FnOnce(&mut Table<'_, &'static str, &'static [u8]>) -> Result<(), KVError>,
    {
        let txn = self.db.begin_write().map_err(storage)?;
        {
            let mut table = txn.open_table(CLIENT_STATE).map_err(storage)?;
            apply(&mut table)?;
        }
        txn.commit().map_err(storage)
    }
}

impl KVStore for RedbStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError> {
        let txn = self.db.begin_read().map_err(storage)?;
        let table = txn.open_table(CLIENT_STATE).map_err(storage)?;
        let value = table.get(key).map_err(storage)?;
        Ok(value.map(|v| v.value().to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError> {
        self.write(|table| {
            table.insert(key, value).map_err(storage)?;
            Ok(())
        })
    }

    fn delete(&self, key: &str) -> Result<(), KVError> {
        self.write(|table| {
            table.remove(key).map_err(storage)?;
            Ok(())
        })
    }

    fn batch_set(&self, entries: &[(&str, &[u8])]) -> Result<(), KVError> {
        self.write(|table| {
            for (key, value) in entries {
                table.insert(*key, *value).map_err(storage)?;
            }
            Ok(())
        })
    }

    fn batch_delete(&self, keys: &[&str]) -> Result<(), KVError> {
        self.write(|table| {
            for key in keys {
                table.remove(*key).map_err(storage)?;
            }
            Ok(())
        })
    }
}
