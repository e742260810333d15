pub mod api;
pub mod config;
pub mod games;
pub mod logger;
pub mod validation;
pub mod views;
