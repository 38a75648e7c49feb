pub mod components;
pub mod config;
pub mod hooks;
pub mod i18n;
pub mod models;
pub mod services;
pub mod utils;
