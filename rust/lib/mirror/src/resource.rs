use std::fmt;

use flightdeck_client::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// How a confirmed delete is mirrored locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The entry is removed.
    Hard,
    /// The entry stays; its soft-delete flag is set.
    Soft,
}

/// Endpoint layout of an entity family. `{id}` in a template is replaced
/// by the entity id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub list: String,
    pub item: String,
    pub create: String,
    pub create_method: Method,
    pub update: String,
    pub update_method: Method,
    pub delete: String,
    pub delete_method: Method,
}

impl Routes {
    /// `/{c}/all`, `/{c}/{id}`, `POST /{c}/create`, `PUT /{c}/{id}/update`,
    /// `DELETE /{c}/{id}/delete`.
    pub fn standard(collection: &str) -> Self {
        Self {
            list: format!("/{}/all", collection),
            item: format!("/{}/{{id}}", collection),
            create: format!("/{}/create", collection),
            create_method: Method::Post,
            update: format!("/{}/{{id}}/update", collection),
            update_method: Method::Put,
            delete: format!("/{}/{{id}}/delete", collection),
            delete_method: Method::Delete,
        }
    }

    /// Plain REST: `GET|POST /{c}`, `GET|PUT|DELETE /{c}/{id}`.
    pub fn rest(collection: &str) -> Self {
        let item = format!("/{}/{{id}}", collection);
        Self {
            list: format!("/{}", collection),
            create: format!("/{}", collection),
            create_method: Method::Post,
            update: item.clone(),
            update_method: Method::Put,
            delete: item.clone(),
            delete_method: Method::Delete,
            item,
        }
    }

    pub fn list_at(mut self, path: &str) -> Self {
        self.list = path.to_string();
        self
    }

    /// Delete through a different verb (`POST .../delete` for cancellations).
    pub fn delete_via(mut self, method: Method) -> Self {
        self.delete_method = method;
        self
    }

    /// Fill `{id}` in a template.
    pub fn resolve(template: &str, id: &impl fmt::Display) -> String {
        template.replace("{id}", &id.to_string())
    }
}

/// An entity family mirrored by a [`DomainStore`](crate::DomainStore).
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Id: Clone + PartialEq + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Path segment of the family (`airlines`, `class-flights`). Also keys
    /// the bus path and the notice wording.
    const COLLECTION: &'static str;
    /// Human label, singular (`class flight`).
    const LABEL: &'static str;
    /// Human label, plural (`class flights`).
    const LABEL_PLURAL: &'static str;
    const DELETION: Deletion = Deletion::Hard;

    fn id(&self) -> Self::Id;

    fn routes() -> Routes {
        Routes::standard(Self::COLLECTION)
    }

    /// Set the soft-delete flag. Only called for [`Deletion::Soft`].
    fn set_deleted(&mut self, _deleted: bool) {}
}
