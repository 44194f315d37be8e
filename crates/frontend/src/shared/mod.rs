pub mod api_utils;
pub mod config;
pub mod data_source;
pub mod list_screen;
pub mod list_utils;
pub mod list_view;
pub mod rest_source;
