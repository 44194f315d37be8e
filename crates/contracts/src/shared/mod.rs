pub mod list_query;
pub mod record;

pub use list_query::{FetchedPage, ListQuery, PaginatedResponse, SortDirection};
pub use record::{FieldValue, Record};
