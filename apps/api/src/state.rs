use sqlx::PgPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The pool is the only process-wide resource: opened once at startup, closed
/// once on shutdown.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}
