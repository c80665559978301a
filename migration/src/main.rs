// migration/src/main.rs
use sea_orm_migration::prelude::*;

// `DATABASE_URL` を使って up / down / status などを実行する
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
