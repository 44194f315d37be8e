//! Источник данных списков поверх REST API

use crate::shared::api_utils::{api_url, bearer, with_query};
use crate::shared::config::ApiSettings;
use crate::shared::data_source::{DataSource, FetchError};
use crate::shared::list_utils::shape_page;
use async_trait::async_trait;
use contracts::shared::{FetchedPage, ListQuery, PaginatedResponse, Record};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::time::Duration;

/// Имена query-параметров постраничного endpoint-а
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingParams {
    pub page: &'static str,
    pub size: &'static str,
    /// Параметр серверного поиска, если endpoint его поддерживает
    pub search: Option<&'static str>,
}

/// Форма ответа endpoint-а
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{ items, pageNumber, pageSize, totalCount, totalPages }`
    Paginated(PagingParams),
    /// Массив записей целиком
    Array,
    /// Массив записей в поле объекта, например `{ "pharmacies": [...] }`
    Nested(&'static str),
}

/// Описание endpoint-а списка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: String,
    pub shape: ResponseShape,
    /// Фиксированные параметры запроса (например, id представителя)
    pub fixed_query: BTreeMap<String, String>,
}

impl Endpoint {
    pub fn paginated(path: impl Into<String>, paging: PagingParams) -> Self {
        Self {
            path: path.into(),
            shape: ResponseShape::Paginated(paging),
            fixed_query: BTreeMap::new(),
        }
    }

    pub fn array(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            shape: ResponseShape::Array,
            fixed_query: BTreeMap::new(),
        }
    }

    pub fn nested(path: impl Into<String>, field: &'static str) -> Self {
        Self {
            path: path.into(),
            shape: ResponseShape::Nested(field),
            fixed_query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.fixed_query.insert(key.to_string(), value.to_string());
        self
    }
}

/// HTTP-источник данных списка
pub struct RestDataSource<R> {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    endpoint: Endpoint,
    search_keys: Vec<String>,
    _record: PhantomData<fn() -> R>,
}

impl<R> RestDataSource<R> {
    pub fn new(
        api: &ApiSettings,
        endpoint: Endpoint,
        search_keys: Vec<String>,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(api.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: api.base_url.clone(),
            token: api.token.clone(),
            endpoint,
            search_keys,
            _record: PhantomData,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Полный URL запроса страницы
    pub fn request_url(&self, query: &ListQuery) -> Result<String, FetchError> {
        let mut params = self.endpoint.fixed_query.clone();
        if let ResponseShape::Paginated(paging) = &self.endpoint.shape {
            params.insert(paging.page.to_string(), query.page_index.to_string());
            params.insert(paging.size.to_string(), query.page_size.to_string());
            let term = query.search_term.trim();
            if let (Some(search), false) = (paging.search, term.is_empty()) {
                params.insert(search.to_string(), term.to_string());
            }
        }
        let url = api_url(&self.base_url, &self.endpoint.path);
        with_query(&url, &params).map_err(|e| FetchError::InvalidRequest(e.to_string()))
    }

    async fn get_body(&self, url: &str) -> Result<String, FetchError> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", bearer(token));
        }

        log::debug!("GET {}", url);
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("GET {} failed with status {}: {}", url, status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl<R> DataSource<R> for RestDataSource<R>
where
    R: Record + DeserializeOwned + Send,
{
    async fn fetch_page(&self, query: &ListQuery) -> Result<FetchedPage<R>, FetchError> {
        let url = self.request_url(query)?;
        let body = self.get_body(&url).await?;

        match &self.endpoint.shape {
            ResponseShape::Paginated(_) => {
                let response: PaginatedResponse<R> = serde_json::from_str(&body)?;
                Ok(response.into())
            }
            ResponseShape::Array => {
                let items: Vec<R> = serde_json::from_str(&body)?;
                Ok(shape_page(items, &self.search_keys, query))
            }
            ResponseShape::Nested(field) => {
                let mut value: serde_json::Value = serde_json::from_str(&body)?;
                // Пустой ответ приходит без поля или с null
                let items: Vec<R> = match value.get_mut(*field).map(serde_json::Value::take) {
                    None | Some(serde_json::Value::Null) => {
                        log::debug!("response has no `{}` items", field);
                        Vec::new()
                    }
                    Some(inner) => serde_json::from_value(inner)?,
                };
                Ok(shape_page(items, &self.search_keys, query))
            }
        }
    }

    fn returns_whole_collection(&self) -> bool {
        !matches!(self.endpoint.shape, ResponseShape::Paginated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiSettings {
        ApiSettings {
            base_url: "http://127.0.0.1:5000/".to_string(),
            timeout_secs: 5,
            token: None,
        }
    }

    fn query(page_index: usize, search: &str) -> ListQuery {
        ListQuery {
            search_term: search.to_string(),
            sort_key: None,
            sort_dir: Default::default(),
            page_index,
            page_size: 10,
        }
    }

    #[test]
    fn test_paginated_url_with_search() {
        let endpoint = Endpoint::paginated(
            "/api/warehouse/GellAllWithPagination",
            PagingParams {
                page: "page",
                size: "pageSize",
                search: Some("search"),
            },
        );
        let source: RestDataSource<contracts::domain::a002_warehouse::aggregate::Warehouse> =
            RestDataSource::new(&api(), endpoint, Vec::new()).unwrap();

        assert_eq!(
            source.request_url(&query(2, "  ")).unwrap(),
            "http://127.0.0.1:5000/api/warehouse/GellAllWithPagination?page=2&pageSize=10"
        );
        assert_eq!(
            source.request_url(&query(1, " delta ")).unwrap(),
            "http://127.0.0.1:5000/api/warehouse/GellAllWithPagination?page=1&pageSize=10&search=delta"
        );
    }

    #[test]
    fn test_search_ignored_without_search_param() {
        let endpoint = Endpoint::paginated(
            "/api/Medicine/GetAllMedicinesPaginated",
            PagingParams {
                page: "pageNumber",
                size: "size",
                search: None,
            },
        );
        let source: RestDataSource<contracts::domain::a001_medicine::aggregate::Medicine> =
            RestDataSource::new(&api(), endpoint, Vec::new()).unwrap();
        assert_eq!(
            source.request_url(&query(3, "pan")).unwrap(),
            "http://127.0.0.1:5000/api/Medicine/GetAllMedicinesPaginated?pageNumber=3&size=10"
        );
    }

    #[test]
    fn test_array_url_keeps_fixed_query_only() {
        let endpoint = Endpoint::nested("/api/Representative/GetPharmaciesCountUsingId", "pharmacies")
            .with_query("id", 42);
        let source: RestDataSource<contracts::domain::a003_pharmacy::aggregate::Pharmacy> =
            RestDataSource::new(&api(), endpoint, Vec::new()).unwrap();
        assert_eq!(
            source.request_url(&query(5, "x")).unwrap(),
            "http://127.0.0.1:5000/api/Representative/GetPharmaciesCountUsingId?id=42"
        );
    }
}
