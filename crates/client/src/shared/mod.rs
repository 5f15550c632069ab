pub mod api;
pub mod config;
pub mod data;
pub mod date_utils;
pub mod excel_importer;
pub mod list;
pub mod logger;
