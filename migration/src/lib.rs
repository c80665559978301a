// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 分析統計マイグレーション
mod m20250501_000001_create_analytics_stats_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 日次分析統計テーブル作成
            Box::new(m20250501_000001_create_analytics_stats_table::Migration),
        ]
    }
}
