use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

/// Склад-поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub governate: String,
    /// Район расположения склада
    #[serde(default)]
    pub warehouse_location_area: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_trusted: bool,
    #[serde(default)]
    pub is_warehouse_approved: bool,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for Warehouse {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.name),
            "address" => FieldValue::text(&self.address),
            "phone" => FieldValue::text(&self.phone),
            "email" => FieldValue::text(&self.email),
            "governate" => FieldValue::text(&self.governate),
            "area" => FieldValue::text(&self.warehouse_location_area),
            "isTrusted" => FieldValue::Flag(self.is_trusted),
            "isApproved" => FieldValue::Flag(self.is_warehouse_approved),
            "createdAt" => FieldValue::opt_text(self.created_at.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_warehouse() {
        let json = r#"{"id": 3, "name": "Delta", "isTrusted": true}"#;
        let w: Warehouse = serde_json::from_str(json).unwrap();
        assert_eq!(w.record_id(), 3);
        assert_eq!(w.field("isTrusted"), FieldValue::Flag(true));
        assert_eq!(w.field("area"), FieldValue::text(""));
        assert_eq!(w.is_active, None);
    }
}
