use crate::shared::data_source::{DataSource, FetchError};
use contracts::shared::{FetchedPage, ListQuery};

/// Запрос страницы, выданный view-model в серверном режиме.
///
/// Presenter выполняет его через `run` и возвращает результат в
/// `ListViewModel::complete`. Несколько запросов могут выполняться
/// одновременно: применяется только ответ, параметры которого совпадают
/// с текущими на момент прихода.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    id: u64,
    query: ListQuery,
}

impl PageRequest {
    pub(crate) fn new(id: u64, query: ListQuery) -> Self {
        Self { id, query }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Выполнить запрос к источнику данных
    pub async fn run<R, D>(self, source: &D) -> FetchOutcome<R>
    where
        D: DataSource<R> + ?Sized,
    {
        let result = source.fetch_page(&self.query).await;
        self.resolve(result)
    }

    /// Связать запрос с уже полученным результатом
    pub fn resolve<R>(self, result: Result<FetchedPage<R>, FetchError>) -> FetchOutcome<R> {
        FetchOutcome {
            request: self,
            result,
        }
    }
}

/// Запрос вместе с результатом его выполнения
#[derive(Debug)]
pub struct FetchOutcome<R> {
    pub request: PageRequest,
    pub result: Result<FetchedPage<R>, FetchError>,
}
