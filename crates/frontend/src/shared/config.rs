use crate::shared::list_utils::SortSpec;
use crate::shared::list_view::{ListMode, ListViewModel, DEFAULT_PAGE_SIZE};
use contracts::shared::{Record, SortDirection};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("list `{0}` is not configured")]
    UnknownList(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub lists: BTreeMap<String, ListSettings>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer-токен для заголовка Authorization
    #[serde(default)]
    pub token: Option<String>,
}

/// Настройки одного списка
#[derive(Debug, Deserialize, Clone)]
pub struct ListSettings {
    #[serde(default)]
    pub mode: ListMode,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Размер страницы при загрузке полной коллекции (клиентский режим)
    #[serde(default)]
    pub fetch_page_size: Option<usize>,
    #[serde(default)]
    pub search_keys: Vec<String>,
    #[serde(default)]
    pub sort_key: Option<String>,
    #[serde(default)]
    pub sort_dir: SortDirection,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://127.0.0.1:5000"
timeout_secs = 30

[lists.medicines]
mode = "client"
page_size = 10
fetch_page_size = 100
search_keys = ["name", "arabicName", "description"]
sort_key = "name"

[lists.warehouses]
mode = "server"
page_size = 10

[lists.representatives]
mode = "client"
page_size = 10
search_keys = ["name", "code", "address", "governate", "email", "phoneNumber"]
sort_key = "name"

[lists.pharmacies]
mode = "client"
page_size = 10
search_keys = ["name", "phoneNumber", "governate", "userName", "address", "areaName"]

[lists.missing_items]
mode = "client"
page_size = 10
search_keys = ["pharmacyName", "representativeName"]
sort_key = "pharmacyName"

[lists.missing_item_details]
mode = "client"
page_size = 10
search_keys = ["medicineName", "arabicName"]

[lists.warehouse_medicines]
mode = "client"
page_size = 10
fetch_page_size = 100
search_keys = ["name", "arabicName", "drugType"]
sort_key = "name"

[lists.warehouse_orders]
mode = "client"
page_size = 10
search_keys = ["orderNumber", "pharmacyName", "status"]
sort_key = "orderDate"
sort_dir = "desc"
"#;

impl AppConfig {
    pub fn list(&self, name: &str) -> Result<&ListSettings, ConfigError> {
        self.lists
            .get(name)
            .ok_or_else(|| ConfigError::UnknownList(name.to_string()))
    }
}

impl ListSettings {
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec {
            key: self.sort_key.clone(),
            direction: self.sort_dir,
        }
    }

    pub fn fetch_page_size(&self) -> usize {
        self.fetch_page_size.unwrap_or(self.page_size)
    }

    /// Создать view-model списка с этими настройками
    pub fn view_model<R: Record>(&self) -> ListViewModel<R> {
        ListViewModel::new(self.mode, self.page_size)
            .with_search_keys(self.search_keys.clone())
            .with_sort(self.sort_spec())
    }
}

/// Разобрать конфигурацию из строки TOML
pub fn parse_config(contents: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(contents)?;
    for (name, list) in &config.lists {
        if list.page_size == 0 || list.fetch_page_size == Some(0) {
            return Err(ConfigError::Invalid(format!(
                "list `{}` must have a positive page size",
                name
            )));
        }
    }
    Ok(config)
}

pub fn default_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                log::info!("Loading config from: {}", config_path.display());
                return Ok(load_config_from(&config_path)?);
            } else {
                log::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    log::info!("Using default embedded configuration");
    Ok(default_config()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config().unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api.timeout_secs, 30);

        let medicines = config.list("medicines").unwrap();
        assert_eq!(medicines.mode, ListMode::Client);
        assert_eq!(medicines.fetch_page_size(), 100);

        let orders = config.list("warehouse_orders").unwrap();
        assert_eq!(orders.sort_spec(), SortSpec::by("orderDate", SortDirection::Desc));

        let warehouses = config.list("warehouses").unwrap();
        assert_eq!(warehouses.mode, ListMode::Server);
        assert_eq!(warehouses.fetch_page_size(), 10);
        assert!(warehouses.search_keys.is_empty());
    }

    #[test]
    fn test_unknown_list() {
        let config = default_config().unwrap();
        assert!(matches!(config.list("orders"), Err(ConfigError::UnknownList(_))));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml = r#"
            [api]
            base_url = "http://localhost"

            [lists.broken]
            page_size = 0
        "#;
        assert!(matches!(parse_config(toml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let toml = r#"
            [api]
            base_url = "http://localhost"
            token = "secret"

            [lists.simple]
            sort_dir = "desc"
        "#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.token.as_deref(), Some("secret"));
        let simple = config.list("simple").unwrap();
        assert_eq!(simple.mode, ListMode::Client);
        assert_eq!(simple.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(simple.sort_spec(), SortSpec { key: None, direction: SortDirection::Desc });
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
