//! CLI entry point: assemble the dashboard report and print it as JSON.
//!
//! With no arguments the range is the last 90 days ending today, matching
//! the dashboard's default window.

use chrono::{Duration, Local};
use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::EnvFilter;

use nathanauto_backoffice::reporting::{self, DateRange, SchemaCapabilities};
use nathanauto_backoffice::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let range = match args.as_slice() {
        [start, end] => DateRange::parse(start, end)?,
        [] => {
            let end = Local::now().date_naive();
            let start = end - Duration::days(90);
            DateRange::new(start, end)?
        }
        _ => anyhow::bail!("usage: nathanauto-backoffice [START END] (dates as YYYY-MM-DD)"),
    };

    let caps = SchemaCapabilities::detect(&pool).await;

    let report = reporting::dashboard_report(&pool, &caps, range.start(), range.end()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
