//! Связка view-model списка с его источником данных
//!
//! `ListScreen` выполняет запросы, которые выдаёт view-model, и сразу
//! применяет ответы. Для параллельных запросов presenter может работать
//! с `ListViewModel` и `PageRequest` напрямую.

use crate::shared::config::AppConfig;
use crate::shared::data_source::{load_all_pages, DataSource};
use crate::shared::list_view::{ListEvent, ListMode, ListViewModel, PageRequest, VisiblePage};
use crate::shared::rest_source::{Endpoint, RestDataSource};
use contracts::shared::Record;
use serde::de::DeserializeOwned;

/// Описание конкретного списка: тип записи, имя в конфигурации, endpoint
pub trait ListDefinition {
    type Item: Record + DeserializeOwned + Send + 'static;

    /// Имя секции `[lists.<name>]` в конфигурации
    fn name(&self) -> &'static str;

    fn endpoint(&self) -> Endpoint;
}

pub struct ListScreen<R> {
    view_model: ListViewModel<R>,
    source: Box<dyn DataSource<R>>,
    fetch_page_size: usize,
}

impl<R: Record + Send + 'static> ListScreen<R> {
    pub fn new(
        view_model: ListViewModel<R>,
        source: Box<dyn DataSource<R>>,
        fetch_page_size: usize,
    ) -> Self {
        Self {
            view_model,
            source,
            fetch_page_size,
        }
    }

    /// Открыть список по его описанию и конфигурации
    pub fn open<D>(definition: &D, config: &AppConfig) -> anyhow::Result<Self>
    where
        D: ListDefinition<Item = R>,
        R: DeserializeOwned,
    {
        let settings = config.list(definition.name())?;
        let source: RestDataSource<R> = RestDataSource::new(
            &config.api,
            definition.endpoint(),
            settings.search_keys.clone(),
        )?;
        log::info!(
            "opening list `{}` ({:?} mode, page size {})",
            definition.name(),
            settings.mode,
            settings.page_size
        );
        Ok(Self::new(
            settings.view_model(),
            Box::new(source),
            settings.fetch_page_size(),
        ))
    }

    pub fn view_model(&self) -> &ListViewModel<R> {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ListViewModel<R> {
        &mut self.view_model
    }

    pub fn visible_page(&self) -> VisiblePage<'_, R> {
        self.view_model.visible_page()
    }

    pub fn take_events(&mut self) -> Vec<ListEvent> {
        self.view_model.take_events()
    }

    /// Загрузить данные заново: всю коллекцию в клиентском режиме,
    /// текущую страницу в серверном
    pub async fn refresh(&mut self) {
        match self.view_model.mode() {
            ListMode::Client => {
                let id = self.view_model.begin_refresh();
                let result = load_all_pages(self.source.as_ref(), self.fetch_page_size).await;
                self.view_model.complete_refresh(id, result);
            }
            ListMode::Server => {
                let request = self.view_model.reload();
                self.run(request).await;
            }
        }
    }

    pub async fn search(&mut self, term: &str) {
        let request = self.view_model.set_search_term(term);
        self.run(request).await;
    }

    pub async fn go_to_page(&mut self, index: usize) {
        let request = self.view_model.go_to_page(index);
        self.run(request).await;
    }

    pub async fn set_page_size(&mut self, page_size: usize) {
        let request = self.view_model.set_page_size(page_size);
        self.run(request).await;
    }

    pub fn sort_by(&mut self, field: &str) {
        self.view_model.toggle_sort(field);
    }

    async fn run(&mut self, request: Option<PageRequest>) {
        if let Some(request) = request {
            let outcome = request.run(self.source.as_ref()).await;
            self.view_model.complete(outcome);
        }
    }
}
