// src/main.rs
// moviedb - opens the catalog database and prints per-year statistics

use std::sync::Arc;

use anyhow::Context;
use log::{error, info};

use moviedb::application::{AppState, ErrorResponse};
use moviedb::config::DatabaseConfig;
use moviedb::db::{create_connection_pool, get_connection, get_database_stats, initialize_database};
use moviedb::AppResult;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            println!("{}", report);
            Ok(())
        }
        Err(err) => {
            let response = ErrorResponse::from_app_error(err);
            let body = serde_json::to_string_pretty(&response)
                .context("failed to serialize error response")?;
            println!("{}", body);
            error!("moviedb exited with an error");
            std::process::exit(1);
        }
    }
}

fn run() -> AppResult<String> {
    // 1. INFRASTRUCTURE
    let config = DatabaseConfig::from_env()?;
    info!(
        "Opening database at {} (pool size {})",
        config.path.display(),
        config.pool_size
    );
    let pool = Arc::new(create_connection_pool(&config)?);

    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        let stats = get_database_stats(&conn)?;
        info!(
            "Database ready: {} movies, {} stars, {} roles ({} bytes)",
            stats.movie_count, stats.star_count, stats.role_count, stats.size_bytes
        );
    }

    // 2. SERVICES
    let state = AppState::new(pool);

    // 3. REPORT
    let by_year = state.movie_service.stats_by_year()?;
    Ok(serde_json::to_string_pretty(&by_year)?)
}
