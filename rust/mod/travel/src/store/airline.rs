use std::sync::Arc;

use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier, Scoped};

use crate::messages::event;
use crate::model::Airline;

pub struct AirlineStore {
    store: DomainStore<Airline>,
    countries: Scoped<Vec<String>>,
}

deref_store!(AirlineStore, Airline);

impl AirlineStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            countries: Scoped::new(transport.session().clone()),
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn fetch_by_country(&self, country: Option<&str>) -> Result<Vec<Airline>, ClientError> {
        match country {
            Some(country) => self.store.fetch_all(&[("country", country)]).await,
            None => self.store.fetch_all(&[]).await,
        }
    }

    /// Replace the mirror with airlines whose name matches.
    pub async fn search(&self, name: &str) -> Result<Vec<Airline>, ClientError> {
        let call = Call::get("/airlines/search").query("name", name);
        self.store.fetch_list(call, event::SEARCH_FAILED).await
    }

    /// Load the distinct countries airlines are registered in.
    pub async fn fetch_countries(&self) -> Result<Vec<String>, ClientError> {
        let call = Call::get("/airlines/countries");
        self.store
            .perform(call, event::COUNTRIES_FAILED, |_, countries: &Vec<String>| {
                self.countries.set(countries.clone())
            })
            .await
    }

    pub fn countries(&self) -> Vec<String> {
        self.countries.get()
    }
}
