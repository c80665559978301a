// src/repository/mod.rs
pub mod analytics_stat_repository;
