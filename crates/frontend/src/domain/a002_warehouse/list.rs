use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::{Endpoint, PagingParams};
use contracts::domain::a002_warehouse::aggregate::Warehouse;

const PAGING: PagingParams = PagingParams {
    page: "page",
    size: "pageSize",
    search: Some("search"),
};

/// Список складов: поиск и страницы выполняет сервер
#[derive(Debug, Clone, Copy, Default)]
pub struct WarehouseList {
    /// Фильтр по району; `None` означает все склады
    pub area_id: Option<i64>,
}

impl WarehouseList {
    pub fn in_area(area_id: i64) -> Self {
        Self {
            area_id: Some(area_id),
        }
    }
}

impl ListDefinition for WarehouseList {
    type Item = Warehouse;

    fn name(&self) -> &'static str {
        "warehouses"
    }

    fn endpoint(&self) -> Endpoint {
        match self.area_id {
            Some(area_id) if area_id > 0 => Endpoint::paginated(
                format!("/api/warehouse/GetWarehousesByArea/{}", area_id),
                PAGING,
            ),
            _ => Endpoint::paginated("/api/warehouse/GellAllWithPagination", PAGING),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_endpoint() {
        assert_eq!(
            WarehouseList::default().endpoint().path,
            "/api/warehouse/GellAllWithPagination"
        );
        assert_eq!(
            WarehouseList::in_area(4).endpoint().path,
            "/api/warehouse/GetWarehousesByArea/4"
        );
        assert_eq!(
            WarehouseList::in_area(0).endpoint().path,
            "/api/warehouse/GellAllWithPagination"
        );
    }
}
