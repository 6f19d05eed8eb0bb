use std::sync::{Arc, RwLock};

use flightdeck_client::AuthSession;

/// A value owned by one session, kept next to a store's mirror.
///
/// Reads after the session changed see `V::default()`, the same way the
/// mirror reads empty. Write it from the `apply` closure of
/// [`DomainStore::perform`](crate::DomainStore::perform) so a response
/// that lands after the session moved is dropped with the mirror result.
pub struct Scoped<V> {
    session: Arc<AuthSession>,
    slot: RwLock<(u64, V)>,
}

impl<V: Clone + Default> Scoped<V> {
    pub fn new(session: Arc<AuthSession>) -> Self {
        let epoch = session.epoch();
        Self {
            session,
            slot: RwLock::new((epoch, V::default())),
        }
    }

    pub fn get(&self) -> V {
        let epoch = self.session.epoch();
        let slot = self.slot.read().unwrap();
        if slot.0 == epoch {
            slot.1.clone()
        } else {
            V::default()
        }
    }

    pub fn set(&self, value: V) {
        *self.slot.write().unwrap() = (self.session.epoch(), value);
    }

    /// Change the value in place. A value from an earlier session is reset
    /// first.
    pub fn update<F: FnOnce(&mut V)>(&self, f: F) {
        let epoch = self.session.epoch();
        let mut slot = self.slot.write().unwrap();
        if slot.0 != epoch {
            *slot = (epoch, V::default());
        }
        f(&mut slot.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Harness, Widget};
    use flightdeck_client::{Call, Method};

    #[test]
    fn reset_by_session_change() {
        let h = Harness::new();
        h.sign_in();
        let countries: Scoped<Vec<String>> = Scoped::new(h.session.clone());
        countries.set(vec!["Indonesia".into()]);
        assert_eq!(countries.get(), vec!["Indonesia"]);

        h.session.terminate();
        assert!(countries.get().is_empty());

        countries.update(|c| c.push("Singapore".into()));
        assert_eq!(countries.get(), vec!["Singapore"]);
    }

    #[tokio::test]
    async fn written_through_apply_only_for_current_session() {
        let h = Harness::new();
        h.sign_in();
        let store = h.store::<Widget>();
        let total: Scoped<Option<u32>> = Scoped::new(h.session.clone());
        h.stub.ok(Method::Get, "/widgets/count", &7u32);

        store
            .perform(Call::get("/widgets/count"), "load_failed", |_, n: &u32| {
                total.set(Some(*n))
            })
            .await
            .unwrap();
        assert_eq!(total.get(), Some(7));

        let session = h.session.clone();
        store
            .run(
                "load_failed",
                async move {
                    session.terminate();
                    Ok(9u32)
                },
                |_, n: &u32| total.set(Some(*n)),
            )
            .await
            .unwrap();
        assert_eq!(total.get(), None);
    }
}
