use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::{Endpoint, PagingParams};
use contracts::domain::a001_medicine::aggregate::Medicine;

/// Справочник лекарств.
///
/// API не умеет искать по нескольким полям сразу, поэтому справочник
/// загружается целиком (страницами по `fetch_page_size`), а поиск и
/// разбивка выполняются на клиенте.
pub struct MedicineList;

impl ListDefinition for MedicineList {
    type Item = Medicine;

    fn name(&self) -> &'static str {
        "medicines"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::paginated(
            "/api/Medicine/GetAllMedicinesPaginated",
            PagingParams {
                page: "pageNumber",
                size: "size",
                search: None,
            },
        )
    }
}
