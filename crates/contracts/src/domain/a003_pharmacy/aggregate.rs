use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

/// Аптека, закреплённая за представителем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub governate: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub area_id: i64,
    #[serde(default)]
    pub area_name: String,
    #[serde(default)]
    pub order_count: Option<i64>,
}

/// Ответ `GetPharmaciesCountUsingId`: аптеки одного представителя
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativePharmacies {
    pub representative_id: i64,
    #[serde(default)]
    pub representative_name: String,
    #[serde(default)]
    pub pharmacies_count: usize,
    #[serde(default)]
    pub pharmacies: Vec<Pharmacy>,
}

impl Record for Pharmacy {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.name),
            "phoneNumber" => FieldValue::text(&self.phone_number),
            "governate" => FieldValue::text(&self.governate),
            "userName" => FieldValue::text(&self.user_name),
            "address" => FieldValue::text(&self.address),
            "areaName" => FieldValue::text(&self.area_name),
            "orderCount" => FieldValue::opt_number(self.order_count),
            _ => FieldValue::Missing,
        }
    }
}
