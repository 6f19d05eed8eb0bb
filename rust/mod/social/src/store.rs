use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{event as common, DomainStore, Level, Notifier, Resource, Routes};
use serde_json::json;

use crate::messages::event;
use crate::model::{CreatePostRequest, LikePostRequest, Post, UpdatePostRequest};

/// Mirror of the post feed.
pub struct PostStore {
    store: DomainStore<Post>,
}

impl std::ops::Deref for PostStore {
    type Target = DomainStore<Post>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl PostStore {
    /// `transport` must point at the social service.
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    /// Load the feed, optionally one user's posts or one day's (`YYYY-MM-DD`).
    pub async fn fetch_posts(
        &self,
        user_id: Option<&str>,
        date: Option<&str>,
    ) -> Result<Vec<Post>, ClientError> {
        let call = Call::get("/posts")
            .query_opt("userId", user_id)
            .query_opt("date", date);
        self.store.fetch_list(call, common::LOAD_FAILED).await
    }

    pub async fn create(&self, request: &CreatePostRequest) -> Result<Post, ClientError> {
        self.store.create(request).await
    }

    pub async fn update(&self, request: &UpdatePostRequest) -> Result<Post, ClientError> {
        self.store.update(&request.id, request).await
    }

    /// `DELETE /posts/delete` with the id in the body; removed locally once
    /// confirmed.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let id = id.to_string();
        let call = Call::delete(Post::routes().delete).json(&json!({ "id": id }));
        self.store
            .perform_unit(call, common::DELETE_FAILED, |m| {
                m.remove(&id);
            })
            .await?;
        self.store.announce(Level::Success, common::DELETED);
        Ok(())
    }

    /// Like a post as `user_profile_id`. The mirrored likes change only
    /// after the service confirms.
    pub async fn like(&self, post_id: &str, user_profile_id: &str) -> Result<(), ClientError> {
        let request = LikePostRequest {
            id: post_id.to_string(),
            user_profile_id: user_profile_id.to_string(),
        };
        let call = Call::post(Routes::resolve("/posts/{id}/like", &post_id)).json(&request);
        self.store
            .perform_unit(call, event::LIKE_FAILED, |m| {
                for post in m.items.iter_mut().filter(|p| p.id == post_id) {
                    post.add_like(user_profile_id);
                }
                if let Some(post) = m.current.as_mut().filter(|p| p.id == post_id) {
                    post.add_like(user_profile_id);
                }
            })
            .await?;
        self.store.announce(Level::Success, event::LIKED);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightdeck_client::{AuthSession, Method, StubBackend};
    use flightdeck_flux::StateStore;
    use flightdeck_kv::MemoryStore;
    use flightdeck_mirror::RecordingNotifier;

    struct Fixture {
        stub: Arc<StubBackend>,
        i18n: Arc<I18nStore>,
        notices: Arc<RecordingNotifier>,
        posts: PostStore,
    }

    fn fixture() -> Fixture {
        let stub = Arc::new(StubBackend::new());
        let session = Arc::new(AuthSession::new(
            stub.clone(),
            "http://profile",
            Arc::new(MemoryStore::new()),
            Arc::new(StateStore::new()),
        ));
        let transport = Transport::new(stub.clone(), session, "http://api");
        let i18n = Arc::new(I18nStore::new("id"));
        let notices = Arc::new(RecordingNotifier::new());
        let posts = crate::posts(&transport, "http://social/api", notices.clone(), i18n.clone());
        Fixture {
            stub,
            i18n,
            notices,
            posts,
        }
    }

    fn post(id: &str, likes: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "userProfileId": "u1",
            "userProfileName": "Sari",
            "imageUrl": "https://img/1.png",
            "caption": "Bali",
            "likes": likes,
            "likeCount": likes.len()
        })
    }

    #[tokio::test]
    async fn feed_goes_to_social_service() {
        let f = fixture();
        f.stub.ok(Method::Get, "/posts", &json!([post("p1", &[])]));
        f.posts.fetch_posts(Some("u1"), None).await.unwrap();

        let req = f.stub.last_request().unwrap();
        assert_eq!(req.url, "http://social/api/posts");
        assert_eq!(req.query_param("userId"), Some("u1"));
        assert_eq!(req.query_param("date"), None);
        assert_eq!(f.notices.last().unwrap().message, "Data post berhasil dimuat");
    }

    #[tokio::test]
    async fn empty_feed_warns() {
        let f = fixture();
        f.stub.ok(Method::Get, "/posts", &json!([]));
        f.posts.fetch_posts(None, Some("2026-10-16")).await.unwrap();
        let notice = f.notices.last().unwrap();
        assert_eq!(notice.level, Level::Warning);
        assert_eq!(notice.message, "Data post kosong");

        f.i18n.set_locale("en");
        f.stub.ok(Method::Get, "/posts", &json!([]));
        f.posts.fetch_posts(None, None).await.unwrap();
        assert_eq!(f.notices.last().unwrap().message, "No posts found");
    }

    #[tokio::test]
    async fn update_and_delete_carry_id_in_body() {
        let f = fixture();
        let mut edited = post("p1", &[]);
        edited["caption"] = json!("Lombok");
        f.stub
            .ok(Method::Get, "/posts", &json!([post("p1", &[]), post("p2", &[])]))
            .ok(Method::Put, "/posts/update", &edited)
            .ok(Method::Delete, "/posts/delete", &json!(null));
        f.posts.fetch_posts(None, None).await.unwrap();

        let request = UpdatePostRequest {
            id: "p1".into(),
            image_url: "https://img/1.png".into(),
            caption: "Lombok".into(),
        };
        f.posts.update(&request).await.unwrap();
        assert_eq!(f.stub.last_request().unwrap().body.unwrap()["id"], "p1");
        assert_eq!(f.posts.get(&"p1".to_string()).unwrap().caption, "Lombok");
        assert_eq!(f.notices.last().unwrap().message, "Post berhasil diperbarui");

        f.posts.delete("p2").await.unwrap();
        let req = f.stub.last_request().unwrap();
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.body.unwrap(), json!({"id": "p2"}));
        assert_eq!(f.posts.len(), 1);
    }

    #[tokio::test]
    async fn like_applied_after_confirmation() {
        let f = fixture();
        f.stub
            .ok(Method::Get, "/posts", &json!([post("p1", &["u2"])]))
            .ok(Method::Post, "/posts/p1/like", &json!(null))
            .error(Method::Post, "/posts/p1/like", 400, "Post sudah di-like");
        f.posts.fetch_posts(None, None).await.unwrap();

        f.posts.like("p1", "u3").await.unwrap();
        let liked = f.posts.get(&"p1".to_string()).unwrap();
        assert_eq!(liked.likes, vec!["u2", "u3"]);
        assert_eq!(liked.like_count, 2);
        assert_eq!(f.notices.last().unwrap().message, "Like berhasil");

        let body = f.stub.last_request().unwrap().body.unwrap();
        assert_eq!(body, json!({"id": "p1", "userProfileId": "u3"}));

        f.posts.like("p1", "u4").await.unwrap_err();
        assert_eq!(f.posts.get(&"p1".to_string()).unwrap().like_count, 2);
        assert_eq!(
            f.notices.last().unwrap().message,
            "Error saat memberikan like: Post sudah di-like"
        );
    }
}
