//! Источники данных для списков
//!
//! `DataSource`: единственная точка, через которую view-model получает
//! записи. Реализации: REST API (`rest_source`) и коллекция в памяти.

use crate::shared::list_utils::shape_page;
use async_trait::async_trait;
use contracts::shared::{FetchedPage, ListQuery, Record};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;
use thiserror::Error;

/// Ошибки загрузки страницы
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Трейт для источников данных списков
#[async_trait]
pub trait DataSource<R>: Send + Sync {
    /// Загрузить одну страницу с учётом поиска и сортировки
    async fn fetch_page(&self, query: &ListQuery) -> Result<FetchedPage<R>, FetchError>;

    /// Источник получает всю коллекцию одним ответом, какой бы размер
    /// страницы ни был запрошен
    fn returns_whole_collection(&self) -> bool {
        false
    }
}

/// Загрузить всю коллекцию постранично.
///
/// Запрашивает страницы 1, 2, ... пока не получено `total_count` записей
/// или не пришла пустая страница. Источник, который и так отдаёт всю
/// коллекцию, опрашивается один раз.
pub async fn load_all_pages<R, D>(source: &D, page_size: usize) -> Result<Vec<R>, FetchError>
where
    D: DataSource<R> + ?Sized,
{
    let page_size = if source.returns_whole_collection() {
        usize::MAX
    } else {
        page_size.max(1)
    };
    let mut all = Vec::new();
    let mut query = ListQuery::first_page(page_size);

    loop {
        let page = source.fetch_page(&query).await?;
        let received = page.items.len();
        all.extend(page.items);
        log::debug!(
            "loaded page {}: {} items ({} of {})",
            query.page_index,
            received,
            all.len(),
            page.total_count
        );
        if received == 0 || all.len() >= page.total_count {
            break;
        }
        query.page_index += 1;
    }

    Ok(all)
}

/// Источник данных над коллекцией в памяти
pub struct MemoryDataSource<R> {
    items: RwLock<Vec<R>>,
    search_keys: Vec<String>,
    failing: AtomicBool,
    requests: AtomicUsize,
}

impl<R: Record + Clone> MemoryDataSource<R> {
    pub fn new(items: Vec<R>, search_keys: Vec<String>) -> Self {
        Self {
            items: RwLock::new(items),
            search_keys,
            failing: AtomicBool::new(false),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn replace_items(&self, items: Vec<R>) {
        if let Ok(mut guard) = self.items.write() {
            *guard = items;
        }
    }

    /// Все последующие запросы завершаются ошибкой `Unavailable`
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R> DataSource<R> for MemoryDataSource<R>
where
    R: Record + Clone + Send + Sync,
{
    async fn fetch_page(&self, query: &ListQuery) -> Result<FetchedPage<R>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Unavailable("memory source is offline".to_string()));
        }
        let items = self
            .items
            .read()
            .map_err(|_| FetchError::Unavailable("memory source lock poisoned".to_string()))?
            .clone();
        Ok(shape_page(items, &self.search_keys, query))
    }
}
