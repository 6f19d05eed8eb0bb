use std::sync::Arc;

use flightdeck_client::Transport;
use flightdeck_core::ClientError;
use flightdeck_flux::I18nStore;
use flightdeck_mirror::{DomainStore, Notifier};

use super::borrowed;
use crate::model::{Passenger, PassengerQuery};

pub struct PassengerStore {
    store: DomainStore<Passenger>,
}

deref_store!(PassengerStore, Passenger);

impl PassengerStore {
    pub fn new(transport: Arc<Transport>, notifier: Arc<dyn Notifier>, i18n: Arc<I18nStore>) -> Self {
        Self {
            store: DomainStore::new(transport, notifier, i18n),
        }
    }

    pub async fn fetch_filtered(&self, query: &PassengerQuery) -> Result<Vec<Passenger>, ClientError> {
        self.store.fetch_all(&borrowed(&query.pairs())).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Gender, PassengerInput, PassengerQuery};
    use crate::testing::Harness;
    use chrono::NaiveDate;
    use flightdeck_client::Method;
    use serde_json::json;

    fn passenger(id: &str, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "fullName": name,
            "birthDate": "1990-04-12",
            "gender": 2,
            "idPassport": "X1234567"
        })
    }

    #[tokio::test]
    async fn filter_and_create() {
        let h = Harness::new();
        h.stub
            .ok(Method::Get, "/passengers/all", &json!([passenger("P-1", "Sari")]))
            .ok(Method::Post, "/passengers/create", &passenger("P-2", "Dewi"));
        let store = &h.travel.passengers;

        let query = PassengerQuery { gender: Some(Gender::Female), ..Default::default() };
        store.fetch_filtered(&query).await.unwrap();
        assert_eq!(h.stub.last_request().unwrap().query_param("gender"), Some("2"));

        let input = PassengerInput {
            id: None,
            full_name: "Dewi".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            gender: Gender::Female,
            id_passport: "X1234567".into(),
        };
        store.create(&input).await.unwrap();
        let body = h.stub.last_request().unwrap().body.unwrap();
        assert_eq!(body["birthDate"], "1990-04-12");
        assert_eq!(body["gender"], 2);
        assert_eq!(store.items().last().unwrap().full_name, "Dewi");
        assert_eq!(h.notices.last().unwrap().message, "Passenger created successfully");
    }
}
