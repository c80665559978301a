// src/api/dto/mod.rs
pub mod analytics_dto;
