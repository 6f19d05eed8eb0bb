use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::pattern;
use crate::value::StateValue;

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with pattern-matched subscriptions.
///
/// - `set(path, value)` stores a value and notifies all matching subscribers.
/// - `get(path)` reads the current value (Arc clone).
/// - `remove(path)` drops a value and notifies nobody.
/// - `subscribe(pattern, handler)` registers for the store's lifetime.
///
/// Handlers run synchronously on the caller of `set`, after the value is
/// visible to `get` and with no internal lock held, so a handler may read
/// or write the store.
pub struct StateStore {
    values: RwLock<BTreeMap<String, StateValue>>,
    handlers: RwLock<Vec<HandlerEntry>>,
}

#[derive(Clone)]
struct HandlerEntry {
    pattern: String,
    handler: ChangeHandler,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Set a typed value at the given path and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Set a pre-built StateValue at the given path and notify matching subscribers.
    pub fn set_value(&self, path: &str, value: StateValue) {
        self.values
            .write()
            .unwrap()
            .insert(path.to_string(), value.clone());

        let matching: Vec<ChangeHandler> = self
            .handlers
            .read()
            .unwrap()
            .iter()
            .filter(|e| pattern::matches(&e.pattern, path))
            .map(|e| Arc::clone(&e.handler))
            .collect();
        for handler in matching {
            handler(path, &value);
        }
    }

    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.values.read().unwrap().get(path).cloned()
    }

    /// Read and downcast in one step.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.get(path).and_then(|v| v.cloned::<T>())
    }

    /// Remove the state value at the given path. Does NOT notify subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        self.values.write().unwrap().remove(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.values.read().unwrap().contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to state changes matching `pattern`.
    ///
    /// A malformed pattern (`#` before the last level) is still registered
    /// but can only match via its literal prefix; a warning is logged.
    pub fn subscribe<F>(&self, pattern: &str, handler: F)
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        if !pattern::is_valid(pattern) {
            warn!(pattern, "subscription pattern is malformed");
        }
        self.handlers.write().unwrap().push(HandlerEntry {
            pattern: pattern.to_string(),
            handler: Arc::new(handler),
        });
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct AuthState {
        authenticated: bool,
        role: Option<String>,
    }

    #[test]
    fn set_and_get_struct() {
        let store = StateStore::new();
        store.set(
            "auth/state",
            AuthState {
                authenticated: true,
                role: Some("Customer".into()),
            },
        );

        let auth = store.get_as::<AuthState>("auth/state").unwrap();
        assert!(auth.authenticated);
        assert_eq!(auth.role.as_deref(), Some("Customer"));
    }

    #[test]
    fn get_missing_and_wrong_type() {
        let store = StateStore::new();
        assert!(store.get("nothing").is_none());
        store.set("count", 1u32);
        assert_eq!(store.get_as::<String>("count"), None);
    }

    #[test]
    fn overwrite_replaces_value() {
        let store = StateStore::new();
        store.set("airlines/mirror", 1u32);
        store.set("airlines/mirror", 2u32);
        assert_eq!(store.get_as::<u32>("airlines/mirror"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_does_not_notify() {
        let store = StateStore::new();
        let hits = Arc::new(AtomicU64::new(0));
        let h = hits.clone();
        store.subscribe("#", move |_, _| {
            h.fetch_add(1, Ordering::Relaxed);
        });

        store.set("a", 1u32);
        assert!(store.remove("a").is_some());
        assert!(!store.contains("a"));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn subscribers_see_matching_paths_only() {
        let store = StateStore::new();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let s = seen.clone();
        store.subscribe("+/mirror", move |path, _| {
            s.lock().unwrap().push(path.to_string());
        });

        store.set("airlines/mirror", 1u32);
        store.set("auth/state", 2u32);
        store.set("flights/mirror", 3u32);

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["airlines/mirror".to_string(), "flights/mirror".to_string()]
        );
    }

    #[test]
    fn handler_receives_new_value() {
        let store = StateStore::new();
        let got = Arc::new(AtomicU64::new(0));
        let g = got.clone();
        store.subscribe("counter", move |_, v| {
            g.store(*v.downcast_ref::<u64>().unwrap(), Ordering::Relaxed);
        });
        store.set("counter", 42u64);
        assert_eq!(got.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn handler_can_read_store() {
        let store = Arc::new(StateStore::new());
        let observed = Arc::new(AtomicU64::new(0));
        let (st, ob) = (store.clone(), observed.clone());
        store.subscribe("x", move |_, _| {
            ob.store(st.get_as::<u64>("x").unwrap_or(0), Ordering::Relaxed);
        });
        store.set("x", 9u64);
        assert_eq!(observed.load(Ordering::Relaxed), 9);
    }
}
