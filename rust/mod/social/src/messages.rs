//! Post wording. The feed speaks Indonesian; English falls through to the
//! generic templates except where noted.

use std::sync::Arc;

use flightdeck_flux::{I18nHandler, I18nStore, StaticMessages};

pub mod event {
    pub const LIKED: &str = "liked";
    pub const LIKE_FAILED: &str = "like_failed";
}

pub fn catalog() -> StaticMessages {
    StaticMessages::new()
        .add("notice/posts/empty", "id", "Data post kosong")
        .add("notice/posts/loaded", "id", "Data post berhasil dimuat")
        .add("notice/posts/load_failed", "id", "Error saat memuat post: {message}")
        .add("notice/posts/load_one_failed", "id", "Error saat memuat post: {message}")
        .add("notice/posts/created", "id", "Post berhasil dibuat")
        .add("notice/posts/create_failed", "id", "Error saat membuat post: {message}")
        .add("notice/posts/updated", "id", "Post berhasil diperbarui")
        .add("notice/posts/update_failed", "id", "Error saat memperbarui post: {message}")
        .add("notice/posts/deleted", "id", "Post berhasil dihapus")
        .add("notice/posts/delete_failed", "id", "Error saat menghapus post: {message}")
        .add("notice/posts/liked", "en", "Post liked")
        .add("notice/posts/liked", "id", "Like berhasil")
        .add("notice/posts/like_failed", "en", "Error liking post: {message}")
        .add("notice/posts/like_failed", "id", "Error saat memberikan like: {message}")
}

pub fn register(i18n: &I18nStore) {
    let catalog: Arc<dyn I18nHandler> = Arc::new(catalog());
    i18n.handle("notice/posts/#", catalog);
}
