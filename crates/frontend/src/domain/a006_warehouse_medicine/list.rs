use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::{Endpoint, PagingParams};
use contracts::domain::a006_warehouse_medicine::aggregate::WarehouseMedicine;

/// Лекарства одного склада.
///
/// Endpoint постраничный, но без поиска, поэтому список загружается
/// целиком и фильтруется на клиенте.
#[derive(Debug, Clone, Copy)]
pub struct WarehouseMedicinesList {
    pub warehouse_id: i64,
}

impl ListDefinition for WarehouseMedicinesList {
    type Item = WarehouseMedicine;

    fn name(&self) -> &'static str {
        "warehouse_medicines"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::paginated(
            format!("/api/Warehouse/GetWarehousMedicines/{}/medicines", self.warehouse_id),
            PagingParams {
                page: "page",
                size: "pageSize",
                search: None,
            },
        )
    }
}
