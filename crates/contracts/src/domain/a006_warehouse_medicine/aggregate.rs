use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

// ============================================================================
// Drug type
// ============================================================================

/// Тип препарата; API передаёт его числом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrugType {
    Prescription,
    OverTheCounter,
    Other,
}

impl DrugType {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => DrugType::Prescription,
            1 => DrugType::OverTheCounter,
            _ => DrugType::Other,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DrugType::Prescription => "Prescription",
            DrugType::OverTheCounter => "Over the Counter",
            DrugType::Other => "Other",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Лекарство на складе: остаток, скидка и итоговая цена
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseMedicine {
    #[serde(rename = "medicineId")]
    pub id: i64,
    pub english_medicine_name: String,
    #[serde(default)]
    pub arabic_medicine_name: Option<String>,
    #[serde(default)]
    pub drug: i64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub medicine_url: Option<String>,
    #[serde(rename = "finalprice", default)]
    pub final_price: Option<f64>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub discount: f64,
}

impl WarehouseMedicine {
    pub fn drug_type(&self) -> DrugType {
        DrugType::from_code(self.drug)
    }
}

impl Record for WarehouseMedicine {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "name" => FieldValue::text(&self.english_medicine_name),
            "arabicName" => FieldValue::opt_text(self.arabic_medicine_name.as_deref()),
            "drug" => FieldValue::number(self.drug as f64),
            "drugType" => FieldValue::text(self.drug_type().display_name()),
            "price" => FieldValue::number(self.price),
            "finalPrice" => self.final_price.map_or(FieldValue::Missing, FieldValue::Number),
            "quantity" => FieldValue::number(self.quantity as f64),
            "discount" => FieldValue::number(self.discount),
            _ => FieldValue::Missing,
        }
    }
}
