pub mod api;
pub mod browser;
pub mod config;
pub mod date_utils;
pub mod logging;
pub mod preferences;
