//! Database module
//!
//! This module handles database connections, migrations, and the event
//! persistence port with its implementations.

pub mod connection;
pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::PgPool;

pub use connection::*;
pub use memory::InMemoryEventStore;
pub use postgres::PgEventStore;
pub use store::EventStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
