use serde::Deserialize;

/// Где выполняются поиск и постраничная разбивка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Вся коллекция загружена, поиск и страницы считаются на клиенте
    #[default]
    Client,
    /// Поиск и страницы выполняет источник данных
    Server,
}

/// Состояние загрузки списка
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// События для отображения (presenter забирает их через `take_events`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    PageLoaded { page_index: usize, total_count: usize },
    FetchFailed { page_index: usize, message: String },
}
