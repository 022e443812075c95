use sea_orm_migration::prelude::*;

use internship_supervisors_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
