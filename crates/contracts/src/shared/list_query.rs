use serde::{Deserialize, Serialize};

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Параметры запроса одной страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub search_term: String,
    pub sort_key: Option<String>,
    pub sort_dir: SortDirection,
    /// Номер страницы, начиная с 1
    pub page_index: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn first_page(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_key: None,
            sort_dir: SortDirection::Asc,
            page_index: 1,
            page_size,
        }
    }

    /// Смещение первой записи страницы
    pub fn offset(&self) -> usize {
        self.page_index.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// Результат загрузки страницы: записи и общее количество
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage<R> {
    pub items: Vec<R>,
    pub total_count: usize,
}

impl<R> FetchedPage<R> {
    pub fn new(items: Vec<R>, total_count: usize) -> Self {
        Self { items, total_count }
    }
}

/// Постраничный ответ API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub page_number: usize,
    #[serde(default)]
    pub page_size: usize,
    pub total_count: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> From<PaginatedResponse<T>> for FetchedPage<T> {
    fn from(response: PaginatedResponse<T>) -> Self {
        FetchedPage::new(response.items, response.total_count)
    }
}
