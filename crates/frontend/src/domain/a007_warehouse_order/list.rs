use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::Endpoint;
use contracts::domain::a007_warehouse_order::aggregate::WarehouseOrder;

/// Заказы, адресованные складу. API отдаёт их все в поле `result`.
#[derive(Debug, Clone, Copy)]
pub struct WarehouseOrdersList {
    pub warehouse_id: i64,
}

impl ListDefinition for WarehouseOrdersList {
    type Item = WarehouseOrder;

    fn name(&self) -> &'static str {
        "warehouse_orders"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::nested(format!("/api/Order/warehouse/{}", self.warehouse_id), "result")
    }
}
