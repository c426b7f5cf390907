// src/setup.rs

use sea_orm::*;

pub(super) async fn set_up_db(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);
    if url.contains(":memory:") {
        // every pooled connection would otherwise see its own empty database
        opts.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opts).await?;
    tracing::info!(backend = ?db.get_database_backend(), "DB connected");

    models::sync_schema(&db).await?;
    Ok(db)
}
