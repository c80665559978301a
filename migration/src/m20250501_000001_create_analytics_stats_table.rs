use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnalyticsStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnalyticsStats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 1日1行
                    .col(
                        ColumnDef::new(AnalyticsStats::Date)
                            .date()
                            .not_null()
                            .unique_key(),
                    )
                    // スカラーカウンター
                    .col(counter(AnalyticsStats::TotalUsers))
                    .col(counter(AnalyticsStats::NewUsers))
                    .col(counter(AnalyticsStats::ActiveUsers))
                    .col(counter(AnalyticsStats::ReturningUsers))
                    .col(counter(AnalyticsStats::Sessions))
                    .col(counter(AnalyticsStats::DirectSessions))
                    .col(counter(AnalyticsStats::ReferralSessions))
                    .col(
                        ColumnDef::new(AnalyticsStats::TotalRevenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(AnalyticsStats::AvgEngagementTimeSec)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    // カテゴリ別の内訳（キー → 件数）
                    .col(ColumnDef::new(AnalyticsStats::TopCountries).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::ActiveUsersByCountry).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::NewUsersByChannel).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::EventSummary).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::UserGender).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::UserLanguage).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::PlatformSummary).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::OsSummary).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::BrowserSummary).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::DeviceCategory).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::UserActivityOverTime).json_binary())
                    .col(ColumnDef::new(AnalyticsStats::UserRetention).json_binary())
                    .col(
                        ColumnDef::new(AnalyticsStats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AnalyticsStats::Table).to_owned())
            .await
    }
}

fn counter(column: AnalyticsStats) -> ColumnDef {
    ColumnDef::new(column)
        .big_integer()
        .not_null()
        .default(0)
        .to_owned()
}

/// Iden Enum for the 'analytics_stats' table and its columns
#[derive(DeriveIden)]
pub enum AnalyticsStats {
    Table,
    Id,
    Date,
    TotalUsers,
    NewUsers,
    ActiveUsers,
    ReturningUsers,
    Sessions,
    DirectSessions,
    ReferralSessions,
    TotalRevenue,
    AvgEngagementTimeSec,
    TopCountries,
    ActiveUsersByCountry,
    NewUsersByChannel,
    EventSummary,
    UserGender,
    UserLanguage,
    PlatformSummary,
    OsSummary,
    BrowserSummary,
    DeviceCategory,
    UserActivityOverTime,
    UserRetention,
    CreatedAt,
}
