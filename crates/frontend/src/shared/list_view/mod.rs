//! View-model списков: поиск, сортировка и постраничный вывод
//!
//! Клиентский режим работает над полностью загруженной коллекцией.
//! В серверном режиме поиск и страницы выполняет источник данных, а
//! view-model выдаёт `PageRequest` и применяет только актуальные ответы.

mod request;
mod state;
mod view_model;

pub use request::{FetchOutcome, PageRequest};
pub use state::{ListEvent, ListMode, LoadState};
pub use view_model::{total_pages, ListViewModel, VisiblePage, DEFAULT_PAGE_SIZE};
