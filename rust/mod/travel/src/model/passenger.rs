use chrono::NaiveDate;
use flightdeck_mirror::Resource;
use serde::{Deserialize, Serialize};

use super::filter_pairs;

numeric_enum! {
    Gender {
        Male = 1 => "Male",
        Female = 2 => "Female",
        Other = 3 => "Other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: String,
    pub full_name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub gender_label: String,
    pub id_passport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Resource for Passenger {
    type Id = String;
    const COLLECTION: &'static str = "passengers";
    const LABEL: &'static str = "passenger";
    const LABEL_PLURAL: &'static str = "passengers";

    fn id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub id_passport: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassengerQuery {
    pub gender: Option<Gender>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl PassengerQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        filter_pairs(vec![
            ("gender", self.gender.map(|g| u8::from(g).to_string())),
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("age", self.age.map(|a| a.to_string())),
        ])
    }
}
