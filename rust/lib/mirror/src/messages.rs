//! Default notice wording.
//!
//! Stores look up `notice/{collection}/{event}` in the shared
//! [`I18nStore`](flightdeck_flux::I18nStore) first, so a module can override
//! any message for its own collections. Without an override the generic
//! template for the event below is used, filled with the entity labels:
//!
//! | param      | example            |
//! |------------|--------------------|
//! | `entity`   | `class flight`     |
//! | `entities` | `class flights`    |
//! | `Entity`   | `Class flight`     |
//! | `Entities` | `Class flights`    |
//! | `message`  | normalized failure |

use std::sync::OnceLock;

use flightdeck_flux::StaticMessages;

/// Event names shared by every store.
pub mod event {
    pub const LOADED: &str = "loaded";
    pub const EMPTY: &str = "empty";
    pub const LOAD_FAILED: &str = "load_failed";
    pub const LOAD_ONE_FAILED: &str = "load_one_failed";
    pub const CREATED: &str = "created";
    pub const CREATE_FAILED: &str = "create_failed";
    pub const UPDATED: &str = "updated";
    pub const UPDATE_FAILED: &str = "update_failed";
    pub const DELETED: &str = "deleted";
    pub const DELETE_FAILED: &str = "delete_failed";
}

/// Generic templates, keyed by event name.
pub fn defaults() -> &'static StaticMessages {
    static DEFAULTS: OnceLock<StaticMessages> = OnceLock::new();
    DEFAULTS.get_or_init(|| {
        StaticMessages::new()
            .add(event::LOADED, "en", "{Entities} loaded successfully")
            .add(event::LOADED, "id", "Data {entities} berhasil dimuat")
            .add(event::EMPTY, "en", "No {entities} found")
            .add(event::EMPTY, "id", "Data {entities} kosong")
            .add(event::LOAD_FAILED, "en", "Error loading {entities}: {message}")
            .add(event::LOAD_FAILED, "id", "Error saat memuat {entities}: {message}")
            .add(event::LOAD_ONE_FAILED, "en", "Error loading {entity}: {message}")
            .add(event::LOAD_ONE_FAILED, "id", "Error saat memuat {entity}: {message}")
            .add(event::CREATED, "en", "{Entity} created successfully")
            .add(event::CREATED, "id", "{Entity} berhasil dibuat")
            .add(event::CREATE_FAILED, "en", "Error creating {entity}: {message}")
            .add(event::CREATE_FAILED, "id", "Error saat membuat {entity}: {message}")
            .add(event::UPDATED, "en", "{Entity} updated successfully")
            .add(event::UPDATED, "id", "{Entity} berhasil diperbarui")
            .add(event::UPDATE_FAILED, "en", "Error updating {entity}: {message}")
            .add(event::UPDATE_FAILED, "id", "Error saat memperbarui {entity}: {message}")
            .add(event::DELETED, "en", "{Entity} deleted successfully")
            .add(event::DELETED, "id", "{Entity} berhasil dihapus")
            .add(event::DELETE_FAILED, "en", "Error deleting {entity}: {message}")
            .add(event::DELETE_FAILED, "id", "Error saat menghapus {entity}: {message}")
    })
}

/// Notice path for an event of a collection.
pub fn notice_path(collection: &str, event: &str) -> String {
    format!("notice/{}/{}", collection, event)
}

/// Upper-case the first character.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
