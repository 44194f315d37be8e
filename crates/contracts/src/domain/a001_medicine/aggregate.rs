use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

// ============================================================================
// Record
// ============================================================================

/// Лекарство из справочника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    #[serde(rename = "medicineId", default)]
    pub id: i64,
    pub english_medicine_name: String,
    #[serde(default)]
    pub arabic_medicine_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub drug: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for Medicine {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.english_medicine_name),
            "arabicName" => FieldValue::opt_text(self.arabic_medicine_name.as_deref()),
            "description" => FieldValue::opt_text(self.description.as_deref()),
            "price" => FieldValue::number(self.price),
            "drug" => FieldValue::opt_number(self.drug),
            "createdAt" => FieldValue::opt_text(self.created_at.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_medicine() {
        let json = r#"{
            "medicineId": 7,
            "englishMedicineName": "Panadol",
            "arabicMedicineName": "بنادول",
            "price": 35.5,
            "drug": 2
        }"#;
        let m: Medicine = serde_json::from_str(json).unwrap();
        assert_eq!(m.record_id(), 7);
        assert_eq!(m.field("name"), FieldValue::text("Panadol"));
        assert_eq!(m.field("price"), FieldValue::Number(35.5));
        assert!(m.field("description").is_missing());
        assert!(m.field("unknown").is_missing());
    }
}
