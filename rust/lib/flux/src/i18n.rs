//! I18nStore: synchronous, path-based message lookup.
//!
//! Stores ask for user-facing wording by path (`notice/airlines/created`)
//! instead of hard-coding strings, so one store implementation serves every
//! locale. Handlers are registered per pattern (`notice/#`); the first
//! registered handler whose pattern matches wins.
//!
//! # Example
//!
//! ```ignore
//! let i18n = I18nStore::new("en");
//! i18n.handle("notice/#", Arc::new(
//!     StaticMessages::new()
//!         .add("notice/posts/created", "en", "Post created")
//!         .add("notice/posts/created", "id", "Post berhasil dibuat"),
//! ));
//! assert_eq!(i18n.get("notice/posts/created"), "Post created");
//! i18n.set_locale("id");
//! assert_eq!(i18n.get("notice/posts/created"), "Post berhasil dibuat");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pattern;

/// Locale used when a message has no entry for the current one.
pub const FALLBACK_LOCALE: &str = "en";

// ── QueryParams ──

/// Named message arguments.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Add an argument. Values are taken verbatim, so they may contain `&`/`=`.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.push((key.to_string(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace `{key}` placeholders in `template`. Unknown placeholders stay.
    pub fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (k, v) in &self.0 {
            out = out.replace(&format!("{{{}}}", k), v);
        }
        out
    }
}

// ── I18nHandler trait ──

/// Resolves a message path to text for a locale.
pub trait I18nHandler: Send + Sync + 'static {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String;
}

/// Closures implement I18nHandler.
impl<F> I18nHandler for F
where
    F: Fn(&str, &QueryParams, &str) -> String + Send + Sync + 'static,
{
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        (self)(path, query, locale)
    }
}

// ── StaticMessages ──

/// Table-driven handler: `(path, locale) → template`.
///
/// Lookup order is the requested locale, then [`FALLBACK_LOCALE`], then the
/// bare path. Templates use `{key}` placeholders filled from the query.
#[derive(Default)]
pub struct StaticMessages {
    entries: HashMap<String, HashMap<String, String>>,
}

impl StaticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, path: &str, locale: &str, template: &str) -> Self {
        self.entries
            .entry(path.to_string())
            .or_default()
            .insert(locale.to_string(), template.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl I18nHandler for StaticMessages {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        let Some(by_locale) = self.entries.get(path) else {
            return path.to_string();
        };
        let template = by_locale
            .get(locale)
            .or_else(|| by_locale.get(FALLBACK_LOCALE));
        match template {
            Some(t) => query.render(t),
            None => path.to_string(),
        }
    }
}

// ── I18nStore ──

/// Synchronous message store with pattern-routed handlers.
pub struct I18nStore {
    handlers: RwLock<Vec<(String, Arc<dyn I18nHandler>)>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(locale: &str) -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
            locale: RwLock::new(locale.to_string()),
        }
    }

    /// Register a handler for a path pattern (`+`/`#` wildcards allowed).
    pub fn handle(&self, pattern: &str, handler: Arc<dyn I18nHandler>) {
        self.handlers
            .write()
            .unwrap()
            .push((pattern.to_string(), handler));
    }

    /// Look up a path without arguments.
    ///
    /// If no handler matches, returns the path as-is.
    pub fn get(&self, path: &str) -> String {
        self.get_with(path, &QueryParams::empty())
    }

    /// Look up a path with arguments.
    pub fn get_with(&self, path: &str, params: &QueryParams) -> String {
        let locale = self.locale();
        let handler = self
            .handlers
            .read()
            .unwrap()
            .iter()
            .find(|(pattern, _)| pattern::matches(pattern, path))
            .map(|(_, h)| Arc::clone(h));
        match handler {
            Some(h) => h.translate(path, params, &locale),
            None => path.to_string(),
        }
    }

    pub fn set_locale(&self, locale: &str) {
        *self.locale.write().unwrap() = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }
}
