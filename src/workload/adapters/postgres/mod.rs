//! `PostgreSQL` adapters for workload persistence.
//!
//! Shares the board's connection pool type.

mod models;
mod roster;


pub use roster::PostgresRoster;
