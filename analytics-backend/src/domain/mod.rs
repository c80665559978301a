// src/domain/mod.rs
pub mod analytics_category;
pub mod analytics_stat_model;
