//! One-shot export of the `users` table through the redacting logger.
//!
//! Configuration comes from the `PERSONAL_DATA_DB_*` environment; there are
//! no CLI flags. Exit code 1 on any failure, after the error has been
//! logged to stderr.

use pd_core::db::{self, UserRecord, USER_COLUMNS};
use pd_core::logging;
use pd_core::{DbConfig, LogEmitter, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_diagnostics();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "user-data export failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let run_id = logging::generate_run_id();
    tracing::info!(run_id = %run_id, "starting user-data export");

    let config = DbConfig::from_env()?;
    let pool = db::connect(&config).await?;
    let users = db::fetch_users(&pool).await?;

    let emitter = LogEmitter::to_stdout();
    let rows = users.into_iter().map(UserRecord::into_values);
    let emitted = emitter.emit_rows(&USER_COLUMNS, rows)?;

    pool.close().await;
    tracing::info!(run_id = %run_id, rows = emitted, "export complete");
    Ok(())
}
