use flightdeck_client::Method;
use flightdeck_mirror::{Resource, Routes};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_profile_id: String,
    #[serde(default)]
    pub user_profile_name: String,
    pub image_url: String,
    pub caption: String,
    #[serde(default)]
    pub created_at: String,
    /// Profile ids that liked the post.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub time_ago: String,
}

impl Post {
    /// Record a like by `user_profile_id`; liking twice counts once.
    pub fn add_like(&mut self, user_profile_id: &str) {
        if !self.likes.iter().any(|id| id == user_profile_id) {
            self.likes.push(user_profile_id.to_string());
        }
        self.like_count = self.likes.len() as u32;
    }
}

impl Resource for Post {
    type Id = String;
    const COLLECTION: &'static str = "posts";
    const LABEL: &'static str = "post";
    const LABEL_PLURAL: &'static str = "posts";

    fn id(&self) -> String {
        self.id.clone()
    }

    /// Update and delete carry the id in the body.
    fn routes() -> Routes {
        Routes {
            list: "/posts".to_string(),
            item: "/posts/{id}".to_string(),
            create: "/posts/create".to_string(),
            create_method: Method::Post,
            update: "/posts/update".to_string(),
            update_method: Method::Put,
            delete: "/posts/delete".to_string(),
            delete_method: Method::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_profile_id: String,
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: String,
    pub image_url: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    pub id: String,
    pub user_profile_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_is_counted_once() {
        let mut post: Post = serde_json::from_str(
            r#"{"id":"p1","userProfileId":"u1","imageUrl":"x.png","caption":"hi","likes":["u2"],"likeCount":1}"#,
        )
        .unwrap();
        post.add_like("u3");
        post.add_like("u3");
        assert_eq!(post.likes, vec!["u2", "u3"]);
        assert_eq!(post.like_count, 2);
    }
}
