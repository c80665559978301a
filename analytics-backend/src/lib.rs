// src/lib.rs
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use api::dto::analytics_dto::AggregateSummary;
pub use error::{AppError, AppResult};
