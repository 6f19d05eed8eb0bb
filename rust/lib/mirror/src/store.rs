//! The generic mirror engine.
//!
//! Every operation follows one shape:
//!
//! ```text
//! begin      loading = true, error cleared, session epoch noted
//!   .await   remote call through the Transport (no lock held)
//! finish     apply the result if the session is unchanged, loading = false
//!            or: record the normalized message, one error notice, re-raise
//! ```
//!
//! Concurrent operations on one store are not queued: the last response to
//! arrive wins, and the first one to finish clears `loading`.

use std::future::Future;
use std::sync::{Arc, RwLock};

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::{I18nHandler, I18nStore, QueryParams};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::messages::{self, capitalize, event, notice_path};
use crate::notifier::{Level, Notice, Notifier};
use crate::resource::{Deletion, Resource, Routes};

// ── MirrorSnapshot ──────────────────────────────────────────────────

/// The local copy of one entity family. Ids in `items` are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorSnapshot<R> {
    pub items: Vec<R>,
    pub current: Option<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for MirrorSnapshot<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
        }
    }
}

impl<R: Resource> MirrorSnapshot<R> {
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|item| item.id() == *id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Replace the entry with the same id, and `current` if it matches.
    /// Returns false when no entry matched.
    pub fn replace(&mut self, entity: R) -> bool {
        let id = entity.id();
        if self.current.as_ref().is_some_and(|c| c.id() == id) {
            self.current = Some(entity.clone());
        }
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Append, or replace in place when the id is already mirrored.
    pub fn push_back(&mut self, entity: R) {
        if !self.replace(entity.clone()) {
            self.items.push(entity);
        }
    }

    /// Prepend, or replace in place when the id is already mirrored.
    pub fn push_front(&mut self, entity: R) {
        if !self.replace(entity.clone()) {
            self.items.insert(0, entity);
        }
    }

    /// Replace the whole collection. Later duplicates overwrite earlier ones.
    pub fn set_items(&mut self, items: Vec<R>) {
        self.items.clear();
        for item in items {
            self.push_back(item);
        }
    }

    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        if self.current.as_ref().is_some_and(|c| c.id() == *id) {
            self.current = None;
        }
        let pos = self.items.iter().position(|item| item.id() == *id)?;
        Some(self.items.remove(pos))
    }

    /// Flip the soft-delete flag of a mirrored entry and of `current`.
    pub fn mark_deleted(&mut self, id: &R::Id, deleted: bool) -> bool {
        if let Some(current) = self.current.as_mut().filter(|c| c.id() == *id) {
            current.set_deleted(deleted);
        }
        match self.items.iter_mut().find(|item| item.id() == *id) {
            Some(item) => {
                item.set_deleted(deleted);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.items.clear();
        self.current = None;
        self.error = None;
    }
}

// ── DomainStore ─────────────────────────────────────────────────────

struct Inner<R> {
    mirror: MirrorSnapshot<R>,
    /// Session epoch the mirror belongs to.
    epoch: u64,
}

pub struct DomainStore<R: Resource> {
    transport: Arc<Transport>,
    notifier: Arc<dyn Notifier>,
    i18n: Arc<I18nStore>,
    inner: RwLock<Inner<R>>,
}

impl<R: Resource> DomainStore<R> {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        let epoch = transport.session().epoch();
        Self {
            transport,
            notifier,
            i18n,
            inner: RwLock::new(Inner {
                mirror: MirrorSnapshot::default(),
                epoch,
            }),
        }
    }

    /// Bus path carrying this store's [`MirrorSnapshot`].
    pub fn bus_path() -> String {
        format!("{}/mirror", R::COLLECTION)
    }

    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    // ── Reads ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> MirrorSnapshot<R> {
        self.sync();
        self.inner.read().unwrap().mirror.clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.sync();
        self.inner.read().unwrap().mirror.items.clone()
    }

    pub fn current(&self) -> Option<R> {
        self.sync();
        self.inner.read().unwrap().mirror.current.clone()
    }

    pub fn get(&self, id: &R::Id) -> Option<R> {
        self.sync();
        self.inner.read().unwrap().mirror.get(id).cloned()
    }

    pub fn loading(&self) -> bool {
        self.inner.read().unwrap().mirror.loading
    }

    pub fn error(&self) -> Option<String> {
        self.sync();
        self.inner.read().unwrap().mirror.error.clone()
    }

    pub fn len(&self) -> usize {
        self.sync();
        self.inner.read().unwrap().mirror.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Standard operations ─────────────────────────────────────────

    /// Load the collection, optionally filtered, replacing the mirror.
    pub async fn fetch_all(&self, filters: &[(&str, &str)]) -> Result<Vec<R>, ClientError> {
        let mut call = Call::get(R::routes().list);
        for (name, value) in filters {
            call = call.query(name, value);
        }
        self.fetch_list(call, event::LOAD_FAILED).await
    }

    /// Issue a list call and replace the mirror with its result. Announces
    /// "no results" for an empty list. A list that arrives after the session
    /// changed is returned but neither mirrored nor announced.
    pub async fn fetch_list(&self, call: Call, failure_event: &str) -> Result<Vec<R>, ClientError> {
        self.load_list(self.transport.fetch::<Vec<R>>(call), failure_event)
            .await
    }

    async fn load_list<W>(&self, work: W, failure_event: &str) -> Result<Vec<R>, ClientError>
    where
        W: Future<Output = Result<Vec<R>, ClientError>> + Send,
    {
        let epoch = self.transport.session().epoch();
        let items = self
            .run(failure_event, work, |m, items: &Vec<R>| m.set_items(items.clone()))
            .await?;
        if self.transport.session().epoch() != epoch {
            return Ok(items);
        }
        if items.is_empty() {
            self.announce(Level::Warning, event::EMPTY);
        } else {
            self.announce(Level::Success, event::LOADED);
        }
        Ok(items)
    }

    /// Load one entity into `current`.
    pub async fn fetch_one(&self, id: &R::Id) -> Result<R, ClientError> {
        let call = Call::get(Routes::resolve(&R::routes().item, id));
        self.perform(call, event::LOAD_ONE_FAILED, |m, entity: &R| {
            m.current = Some(entity.clone())
        })
        .await
    }

    /// Create remotely and append the canonical entity.
    pub async fn create<P: Serialize + ?Sized + Sync>(&self, payload: &P) -> Result<R, ClientError> {
        self.create_with(payload, false).await
    }

    /// Create remotely and prepend the canonical entity (newest first).
    pub async fn create_front<P: Serialize + ?Sized + Sync>(&self, payload: &P) -> Result<R, ClientError> {
        self.create_with(payload, true).await
    }

    async fn create_with<P: Serialize + ?Sized + Sync>(
        &self,
        payload: &P,
        front: bool,
    ) -> Result<R, ClientError> {
        let routes = R::routes();
        let call = Call::new(routes.create_method, routes.create).json(payload);
        let entity = self
            .perform(call, event::CREATE_FAILED, |m, entity: &R| {
                if front {
                    m.push_front(entity.clone())
                } else {
                    m.push_back(entity.clone())
                }
            })
            .await?;
        self.announce(Level::Success, event::CREATED);
        Ok(entity)
    }

    /// Update remotely and replace the mirrored entry with the canonical
    /// response. A locally unknown id leaves `items` as is.
    pub async fn update<P: Serialize + ?Sized + Sync>(
        &self,
        id: &R::Id,
        payload: &P,
    ) -> Result<R, ClientError> {
        let routes = R::routes();
        let call = Call::new(routes.update_method, Routes::resolve(&routes.update, id)).json(payload);
        let entity = self
            .perform(call, event::UPDATE_FAILED, |m, entity: &R| {
                m.replace(entity.clone());
            })
            .await?;
        self.announce(Level::Success, event::UPDATED);
        Ok(entity)
    }

    /// Delete remotely, then remove the entry or flip its soft-delete flag
    /// depending on [`Resource::DELETION`]. The flag is not re-verified.
    pub async fn delete(&self, id: &R::Id) -> Result<(), ClientError> {
        let routes = R::routes();
        let call = Call::new(routes.delete_method, Routes::resolve(&routes.delete, id));
        self.perform_unit(call, event::DELETE_FAILED, |m| match R::DELETION {
            Deletion::Hard => {
                m.remove(id);
            }
            Deletion::Soft => {
                m.mark_deleted(id, true);
            }
        })
        .await?;
        self.announce(Level::Success, event::DELETED);
        Ok(())
    }

    // ── Building blocks for entity extensions ───────────────────────

    /// Run `work` and apply its result to the mirror.
    ///
    /// On failure the mirror is untouched, the normalized message is
    /// recorded, one error notice for `failure_event` is emitted and the
    /// error is returned. Success is not announced; callers do that.
    pub async fn run<T, W, F>(&self, failure_event: &str, work: W, apply: F) -> Result<T, ClientError>
    where
        T: Send,
        W: Future<Output = Result<T, ClientError>> + Send,
        F: FnOnce(&mut MirrorSnapshot<R>, &T) + Send,
    {
        let ticket = self.begin();
        match work.await {
            Ok(value) => {
                self.finish(ticket, |m| apply(m, &value));
                Ok(value)
            }
            Err(err) => Err(self.fail(err, failure_event)),
        }
    }

    /// [`run`](Self::run) for a single call whose `data` is decoded.
    pub async fn perform<T, F>(&self, call: Call, failure_event: &str, apply: F) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Send,
        F: FnOnce(&mut MirrorSnapshot<R>, &T) + Send,
    {
        self.run(failure_event, self.transport.fetch::<T>(call), apply)
            .await
    }

    /// [`run`](Self::run) for a single call whose body is ignored.
    pub async fn perform_unit<F>(&self, call: Call, failure_event: &str, apply: F) -> Result<(), ClientError>
    where
        F: FnOnce(&mut MirrorSnapshot<R>) + Send,
    {
        self.run(failure_event, self.transport.execute(call), |m, _: &()| apply(m))
            .await
    }

    /// Record a failure observed outside [`run`](Self::run), such as missing
    /// input caught before any request: error slot set, one error notice,
    /// error returned. `loading` is left alone.
    pub fn reject(&self, err: ClientError, failure_event: &str) -> ClientError {
        // A 401/403 has already moved the session; record against the new one.
        self.sync();
        {
            let mut inner = self.inner.write().unwrap();
            inner.mirror.error = Some(err.to_string());
        }
        self.publish();
        self.announce_with(
            Level::Error,
            failure_event,
            QueryParams::empty().with("message", err.to_string()),
        );
        err
    }

    /// Emit one notice for `event` of this collection.
    pub fn announce(&self, level: Level, event: &str) {
        self.announce_with(level, event, QueryParams::empty());
    }

    pub fn announce_with(&self, level: Level, event: &str, params: QueryParams) {
        let message = self.wording(event, params);
        self.notifier.notify(Notice::new(level, message));
    }

    /// Resolve the wording for `event`: module catalog first, then the
    /// generic template, then the bare notice path.
    pub fn wording(&self, event: &str, params: QueryParams) -> String {
        // Caller params go last so their text is never re-rendered.
        let mut merged = QueryParams::empty()
            .with("entity", R::LABEL)
            .with("entities", R::LABEL_PLURAL)
            .with("Entity", capitalize(R::LABEL))
            .with("Entities", capitalize(R::LABEL_PLURAL));
        for (key, value) in params.iter() {
            merged = merged.with(key, value);
        }
        let params = merged;

        let path = notice_path(R::COLLECTION, event);
        let text = self.i18n.get_with(&path, &params);
        if text != path {
            return text;
        }
        let text = messages::defaults().translate(event, &params, &self.i18n.locale());
        if text != event {
            return text;
        }
        path
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Drop the mirror when the session moved since it was filled.
    fn sync(&self) {
        let epoch = self.transport.session().epoch();
        if self.inner.read().unwrap().epoch == epoch {
            return;
        }
        {
            let mut inner = self.inner.write().unwrap();
            if inner.epoch == epoch {
                return;
            }
            debug!("{}: session changed, dropping mirror", R::COLLECTION);
            inner.mirror.clear();
            inner.epoch = epoch;
        }
        self.publish();
    }

    fn begin(&self) -> u64 {
        self.sync();
        let epoch = {
            let mut inner = self.inner.write().unwrap();
            inner.mirror.loading = true;
            inner.mirror.error = None;
            inner.epoch
        };
        self.publish();
        epoch
    }

    fn finish<F>(&self, ticket: u64, apply: F)
    where
        F: FnOnce(&mut MirrorSnapshot<R>),
    {
        self.sync();
        {
            let mut inner = self.inner.write().unwrap();
            if inner.epoch == ticket {
                apply(&mut inner.mirror);
            } else {
                debug!("{}: session changed in flight, result not mirrored", R::COLLECTION);
            }
            inner.mirror.loading = false;
        }
        self.publish();
    }

    fn fail(&self, err: ClientError, failure_event: &str) -> ClientError {
        self.sync();
        {
            let mut inner = self.inner.write().unwrap();
            inner.mirror.error = Some(err.to_string());
            inner.mirror.loading = false;
        }
        self.publish();
        self.announce_with(
            Level::Error,
            failure_event,
            QueryParams::empty().with("message", err.to_string()),
        );
        err
    }

    fn publish(&self) {
        let snapshot = self.inner.read().unwrap().mirror.clone();
        self.transport
            .session()
            .bus()
            .set(&Self::bus_path(), snapshot);
    }
}
