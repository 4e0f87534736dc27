use serde_json::json;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::config;
use crate::database::DatabaseManager;

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config().database).await?;
    DatabaseManager::migrate(&pool).await?;

    let target = DatabaseManager::redacted_url(&config().database.url)?;
    output_success(
        output_format,
        &format!("Migrations applied to {}", target),
        Some(json!({ "database": target })),
    )
}
