use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

/// Торговый представитель
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub governate: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Record for Representative {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.name),
            "code" => FieldValue::text(&self.code),
            "phoneNumber" => FieldValue::opt_text(self.phone_number.as_deref()),
            "email" => FieldValue::opt_text(self.email.as_deref()),
            "address" => FieldValue::opt_text(self.address.as_deref()),
            "governate" => FieldValue::opt_text(self.governate.as_deref()),
            "isActive" => FieldValue::Flag(self.is_active),
            _ => FieldValue::Missing,
        }
    }
}
