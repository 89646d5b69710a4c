//! `PostgreSQL` adapters for board persistence.

mod models;
mod schema;
mod status_registry;
mod task_store;


use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

pub use status_registry::PostgresStatusRegistry;
pub use task_store::PostgresTaskStore;

/// `PostgreSQL` connection pool type shared by the board and workload
/// adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;
