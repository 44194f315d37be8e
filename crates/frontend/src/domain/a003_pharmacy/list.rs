use crate::shared::list_screen::ListDefinition;
use crate::shared::rest_source::Endpoint;
use contracts::domain::a003_pharmacy::aggregate::Pharmacy;

/// Аптеки, закреплённые за представителем
#[derive(Debug, Clone, Copy)]
pub struct RepresentativePharmaciesList {
    pub representative_id: i64,
}

impl ListDefinition for RepresentativePharmaciesList {
    type Item = Pharmacy;

    fn name(&self) -> &'static str {
        "pharmacies"
    }

    fn endpoint(&self) -> Endpoint {
        Endpoint::nested("/api/Representative/GetPharmaciesCountUsingId", "pharmacies")
            .with_query("id", self.representative_id)
    }
}
