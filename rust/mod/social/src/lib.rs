//! Social feed: posts with likes, served by their own service.

pub mod messages;
pub mod model;
mod store;

pub use model::{CreatePostRequest, LikePostRequest, Post, UpdatePostRequest};
pub use store::PostStore;

use std::sync::Arc;

use flightdeck_client::Transport;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::Notifier;

/// Build the post store against the social service at `social_url` and
/// register its wording.
pub fn posts(
    transport: &Transport,
    social_url: &str,
    notifier: Arc<dyn Notifier>,
    i18n: Arc<I18nStore>,
) -> PostStore {
    messages::register(&i18n);
    PostStore::new(Arc::new(transport.with_base_url(social_url)), notifier, i18n)
}
