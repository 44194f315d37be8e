use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::Endpoint;
use contracts::domain::a004_representative::aggregate::Representative;

pub struct RepresentativeList;

impl ListDefinition for RepresentativeList {
    type Item = Representative;

    fn name(&self) -> &'static str {
        "representatives"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::array("/api/Representative/GetAllRepresentatives")
    }
}
