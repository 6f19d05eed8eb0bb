use std::sync::Arc;

use chrono::NaiveDate;
use flightdeck_client::{Call, Transport};
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier, Scoped};

use super::borrowed;
use crate::messages::event;
use crate::model::{Booking, BookingQuery, BookingStatistics};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct BookingStore {
    store: DomainStore<Booking>,
    statistics: Scoped<Option<BookingStatistics>>,
}

deref_store!(BookingStore, Booking);

impl BookingStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            statistics: Scoped::new(transport.session().clone()),
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn fetch_filtered(&self, query: &BookingQuery) -> Result<Vec<Booking>, ClientError> {
        self.store.fetch_all(&borrowed(&query.pairs())).await
    }

    /// Booking counts and revenue per flight over `[start, end]`.
    pub async fn fetch_statistics(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BookingStatistics, ClientError> {
        let call = Call::get("/bookings/statistics")
            .query("start", start.format(DATE_FORMAT))
            .query("end", end.format(DATE_FORMAT));
        self.store
            .perform(call, event::STATISTICS_FAILED, |_, stats: &BookingStatistics| {
                self.statistics.set(Some(stats.clone()))
            })
            .await
    }

    /// Last statistics loaded in this session.
    pub fn statistics(&self) -> Option<BookingStatistics> {
        self.statistics.get()
    }

    /// Soft delete through `POST /bookings/{id}/delete`.
    pub async fn cancel(&self, id: &str) -> Result<(), ClientError> {
        self.store.delete(&id.to_string()).await
    }
}
