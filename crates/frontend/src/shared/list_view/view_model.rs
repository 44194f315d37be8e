use super::request::{FetchOutcome, PageRequest};
use super::state::{ListEvent, ListMode, LoadState};
use crate::shared::data_source::FetchError;
use crate::shared::list_utils::{filter_indices, sort_indices, SearchSpec, SortSpec};
use contracts::shared::{ListQuery, Record, SortDirection};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Видимая страница списка
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage<'a, R> {
    pub items: Vec<&'a R>,
    /// Номер страницы, начиная с 1
    pub page_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Количество страниц; пустой список всё равно занимает одну страницу
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        (total_count + page_size - 1) / page_size
    }
}

/// View-model списка: поиск, сортировка и постраничный вывод
/// над загруженной коллекцией.
///
/// Производный порядок (`order`) пересчитывается при каждом изменении
/// входных данных: фильтр всегда применяется ко всей коллекции, затем
/// сортировка, и только потом нарезка страницы.
///
/// В серверном режиме поиск, номер и размер страницы описывают уже
/// показанную страницу. Запрошенные параметры хранятся в `pending` и
/// переносятся в состояние только вместе с ответом.
#[derive(Debug)]
pub struct ListViewModel<R> {
    mode: ListMode,
    source: Vec<R>,
    /// `Some`: коллекция является одной страницей, total задан источником
    server_total: Option<usize>,
    search: SearchSpec,
    sort: SortSpec,
    page_index: usize,
    page_size: usize,
    order: Vec<usize>,
    state: LoadState,
    /// Последний выданный запрос страницы (серверный режим)
    pending: Option<PageRequest>,
    /// Идентификатор последней начатой загрузки всей коллекции
    pending_refresh: Option<u64>,
    next_request_id: u64,
    events: Vec<ListEvent>,
}

impl<R: Record> ListViewModel<R> {
    pub fn new(mode: ListMode, page_size: usize) -> Self {
        Self {
            mode,
            source: Vec::new(),
            server_total: None,
            search: SearchSpec::default(),
            sort: SortSpec::default(),
            page_index: 1,
            page_size: page_size.max(1),
            order: Vec::new(),
            state: LoadState::Idle,
            pending: None,
            pending_refresh: None,
            next_request_id: 1,
            events: Vec::new(),
        }
    }

    pub fn with_search_keys(mut self, keys: Vec<String>) -> Self {
        self.search.keys = keys;
        self.recompute();
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self.recompute();
        self
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search(&self) -> &SearchSpec {
        &self.search
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    pub fn total_count(&self) -> usize {
        self.server_total.unwrap_or(self.order.len())
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count(), self.page_size)
    }

    /// Заменить коллекцию целиком.
    ///
    /// Без `total_count` коллекция считается полной (клиентская разбивка);
    /// с `total_count` это ровно одна страница, total авторитетен.
    pub fn set_source(&mut self, records: Vec<R>, total_count: Option<usize>) {
        self.source = records;
        self.server_total = total_count;
        self.recompute();
    }

    /// Изменить строку поиска. Номер страницы сбрасывается на 1.
    /// В серверном режиме возвращает запрос первой страницы; строка поиска
    /// и номер страницы меняются вместе с ответом на него.
    pub fn set_search_term(&mut self, term: &str) -> Option<PageRequest> {
        match self.mode {
            ListMode::Client => {
                if self.search.term != term {
                    self.search.term = term.to_string();
                    self.page_index = 1;
                    self.recompute();
                }
                None
            }
            ListMode::Server => {
                let mut query = self.target_query();
                if query.search_term == term {
                    return None;
                }
                query.search_term = term.to_string();
                query.page_index = 1;
                Some(self.issue_request(query))
            }
        }
    }

    /// Сортировка всегда выполняется локально; номер страницы не меняется
    pub fn set_sort(&mut self, key: Option<&str>, direction: SortDirection) {
        self.sort = SortSpec {
            key: key.map(str::to_string),
            direction,
        };
        self.recompute();
    }

    /// Переключение сортировки по клику на заголовок колонки
    pub fn toggle_sort(&mut self, field: &str) {
        let sort = self.sort.toggled(field);
        self.set_sort(sort.key.as_deref(), sort.direction);
    }

    /// Перейти на страницу `index` (с 1). Номер вне диапазона игнорируется.
    pub fn go_to_page(&mut self, index: usize) -> Option<PageRequest> {
        let total_pages = self.total_pages();
        if index < 1 || index > total_pages {
            log::debug!("page {} is out of range 1..={}, ignored", index, total_pages);
            return None;
        }

        match self.mode {
            ListMode::Client => {
                self.page_index = index;
                None
            }
            ListMode::Server => {
                let mut query = self.target_query();
                query.page_index = index;
                Some(self.issue_request(query))
            }
        }
    }

    /// Изменить размер страницы; номер страницы сбрасывается на 1
    pub fn set_page_size(&mut self, page_size: usize) -> Option<PageRequest> {
        match self.mode {
            ListMode::Client => {
                if page_size > 0 && page_size != self.page_size {
                    self.page_size = page_size;
                    self.page_index = 1;
                    self.recompute();
                }
                None
            }
            ListMode::Server => {
                let mut query = self.target_query();
                if page_size == 0 || page_size == query.page_size {
                    return None;
                }
                query.page_size = page_size;
                query.page_index = 1;
                Some(self.issue_request(query))
            }
        }
    }

    /// Повторно запросить текущую страницу (только серверный режим)
    pub fn reload(&mut self) -> Option<PageRequest> {
        match self.mode {
            ListMode::Client => None,
            ListMode::Server => {
                let query = self.target_query();
                Some(self.issue_request(query))
            }
        }
    }

    pub fn visible_page(&self) -> VisiblePage<'_, R> {
        let items = if self.server_total.is_some() {
            self.order.iter().map(|&i| &self.source[i]).collect()
        } else {
            self.order
                .iter()
                .skip((self.page_index - 1) * self.page_size)
                .take(self.page_size)
                .map(|&i| &self.source[i])
                .collect()
        };

        VisiblePage {
            items,
            page_index: self.page_index,
            total_pages: self.total_pages(),
            total_count: self.total_count(),
        }
    }

    /// Применить результат запроса страницы.
    ///
    /// Ответ на устаревший запрос (поиск или страница с тех пор изменились)
    /// отбрасывается; возвращает `true`, если ответ применён. При ошибке
    /// на экране остаётся прежняя страница с прежним номером.
    pub fn complete(&mut self, outcome: FetchOutcome<R>) -> bool {
        let FetchOutcome { request, result } = outcome;
        if !self.is_pending(request.query()) {
            log::debug!(
                "discarding stale response #{} (page {}, search {:?})",
                request.id(),
                request.query().page_index,
                request.query().search_term
            );
            return false;
        }

        self.pending = None;
        let query = request.query();
        match result {
            Ok(page) => {
                let total_count = page.total_count;
                self.search.term = query.search_term.clone();
                self.page_index = query.page_index;
                self.page_size = query.page_size;
                self.set_source(page.items, Some(total_count));
                self.state = LoadState::Idle;
                self.events.push(ListEvent::PageLoaded {
                    page_index: self.page_index,
                    total_count,
                });
            }
            Err(e) => self.fail(query.page_index, e),
        }
        true
    }

    /// Начало фоновой загрузки полной коллекции (клиентский режим).
    /// Возвращает идентификатор, который передаётся в `complete_refresh`.
    pub fn begin_refresh(&mut self) -> u64 {
        let id = self.next_id();
        self.pending_refresh = Some(id);
        self.state = LoadState::Loading;
        id
    }

    /// Завершение фоновой загрузки полной коллекции.
    ///
    /// Применяется только результат последней начатой загрузки;
    /// возвращает `true`, если результат применён.
    pub fn complete_refresh(&mut self, id: u64, result: Result<Vec<R>, FetchError>) -> bool {
        if self.pending_refresh != Some(id) {
            log::debug!("discarding stale refresh #{}", id);
            return false;
        }
        self.pending_refresh = None;

        match result {
            Ok(records) => {
                self.set_source(records, None);
                self.state = LoadState::Idle;
                self.events.push(ListEvent::PageLoaded {
                    page_index: self.page_index,
                    total_count: self.total_count(),
                });
            }
            Err(e) => self.fail(self.page_index, e),
        }
        true
    }

    /// Забрать накопленные события
    pub fn take_events(&mut self) -> Vec<ListEvent> {
        std::mem::take(&mut self.events)
    }

    // Текущая страница на экране не трогается
    fn fail(&mut self, page_index: usize, error: FetchError) {
        let message = error.to_string();
        log::warn!("list fetch failed (page {}): {}", page_index, message);
        self.state = LoadState::Error(message.clone());
        self.events.push(ListEvent::FetchFailed {
            page_index,
            message,
        });
    }

    fn current_query(&self) -> ListQuery {
        ListQuery {
            search_term: self.search.term.clone(),
            sort_key: self.sort.key.clone(),
            sort_dir: self.sort.direction,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }

    /// Параметры, от которых строится следующий запрос: последний
    /// запрошенный, либо показанный
    fn target_query(&self) -> ListQuery {
        match &self.pending {
            Some(request) => ListQuery {
                sort_key: self.sort.key.clone(),
                sort_dir: self.sort.direction,
                ..request.query().clone()
            },
            None => self.current_query(),
        }
    }

    fn is_pending(&self, query: &ListQuery) -> bool {
        self.pending.as_ref().is_some_and(|pending| {
            let pending = pending.query();
            query.search_term == pending.search_term
                && query.page_index == pending.page_index
                && query.page_size == pending.page_size
        })
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    fn issue_request(&mut self, query: ListQuery) -> PageRequest {
        let id = self.next_id();
        self.state = LoadState::Loading;
        log::debug!(
            "requesting page {} (size {}, search {:?}) as #{}",
            query.page_index,
            query.page_size,
            query.search_term,
            id
        );
        let request = PageRequest::new(id, query);
        self.pending = Some(request.clone());
        request
    }

    fn recompute(&mut self) {
        self.order = if self.server_total.is_some() {
            (0..self.source.len()).collect()
        } else {
            filter_indices(&self.source, &self.search)
        };
        sort_indices(&self.source, &mut self.order, &self.sort);
        self.page_index = self.page_index.clamp(1, self.total_pages());
    }
}
