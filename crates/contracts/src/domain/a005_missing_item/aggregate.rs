use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

/// Аптека, у которой есть заявки на отсутствующие лекарства
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingItem {
    pub pharmacy_id: i64,
    pub pharmacy_name: String,
    #[serde(default)]
    pub pharmacy_area: String,
    #[serde(default)]
    pub representative_name: String,
}

/// Лекарство, отсутствующее у конкретной аптеки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingItemDetail {
    pub medicine_id: i64,
    pub medicine_name: String,
    #[serde(default)]
    pub arabic_name: String,
}

impl Record for MissingItem {
    fn record_id(&self) -> i64 {
        self.pharmacy_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.pharmacy_id as f64),
            "pharmacyName" => FieldValue::text(&self.pharmacy_name),
            "pharmacyArea" => FieldValue::text(&self.pharmacy_area),
            "representativeName" => FieldValue::text(&self.representative_name),
            _ => FieldValue::Missing,
        }
    }
}

impl Record for MissingItemDetail {
    fn record_id(&self) -> i64 {
        self.medicine_id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.medicine_id as f64),
            "medicineName" => FieldValue::text(&self.medicine_name),
            "arabicName" => FieldValue::text(&self.arabic_name),
            _ => FieldValue::Missing,
        }
    }
}
