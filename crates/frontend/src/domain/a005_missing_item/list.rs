use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::Endpoint;
use contracts::domain::a005_missing_item::aggregate::{MissingItem, MissingItemDetail};

/// Аптеки с заявками на отсутствующие лекарства
pub struct MissingItemsList;

impl ListDefinition for MissingItemsList {
    type Item = MissingItem;

    fn name(&self) -> &'static str {
        "missing_items"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::array("/api/MissingItems/PharmaciesMissingItems")
    }
}

/// Отсутствующие лекарства одной аптеки
#[derive(Debug, Clone, Copy)]
pub struct MissingItemDetailsList {
    pub pharmacy_id: i64,
}

impl ListDefinition for MissingItemDetailsList {
    type Item = MissingItemDetail;

    fn name(&self) -> &'static str {
        "missing_item_details"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::array(format!("/api/MissingItems/MissingItemsById/{}", self.pharmacy_id))
    }
}
