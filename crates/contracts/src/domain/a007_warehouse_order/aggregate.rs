use serde::{Deserialize, Serialize};

use crate::shared::{FieldValue, Record};

/// Позиция заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMedicine {
    pub medicine_id: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
}

impl OrderMedicine {
    pub fn total_price(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Заказ аптеки, адресованный складу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseOrder {
    #[serde(rename = "orderId")]
    pub id: i64,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pharmacy_id: i64,
    #[serde(default)]
    pub pharmacy_name: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub medicines: Vec<OrderMedicine>,
}

/// Ответ `GET /api/Order/warehouse/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseOrdersResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Vec<WarehouseOrder>,
}

impl WarehouseOrder {
    pub fn order_number(&self) -> String {
        format!("ORD-{}", self.id)
    }
}

impl Record for WarehouseOrder {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => FieldValue::number(self.id as f64),
            "orderNumber" => FieldValue::text(self.order_number()),
            "pharmacyName" => FieldValue::text(&self.pharmacy_name),
            "status" => FieldValue::text(&self.status),
            "orderDate" => FieldValue::opt_text(self.order_date.as_deref()),
            "totalPrice" => FieldValue::number(self.total_price),
            "quantity" => FieldValue::number(self.quantity as f64),
            "medicineCount" => FieldValue::number(self.medicines.len() as f64),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_orders_response() {
        let json = r#"{
            "message": "ok",
            "result": [{
                "orderId": 31,
                "totalPrice": 250.5,
                "quantity": 6,
                "status": "Pending",
                "pharmacyId": 4,
                "pharmacyName": "El Ezaby",
                "orderDate": "2025-01-15T10:00:00",
                "medicines": [
                    { "medicineId": 1, "quantity": 4, "price": 20 },
                    { "medicineId": 2, "quantity": 2, "price": 85.25 }
                ]
            }]
        }"#;
        let response: WarehouseOrdersResponse = serde_json::from_str(json).unwrap();
        let order = &response.result[0];
        assert_eq!(order.record_id(), 31);
        assert_eq!(order.field("orderNumber"), FieldValue::text("ORD-31"));
        assert_eq!(order.field("medicineCount"), FieldValue::Number(2.0));
        assert_eq!(order.medicines[0].total_price(), 80.0);
    }

    #[test]
    fn test_missing_result_is_empty() {
        let response: WarehouseOrdersResponse =
            serde_json::from_str(r#"{ "message": "no orders" }"#).unwrap();
        assert!(response.result.is_empty());
    }
}
