// src/service/mod.rs
pub mod analytics_service;
pub mod date_range;
pub mod retention;
pub mod stat_merger;
