//! Task board bounded context.
//!
//! Filtering, sorting and grouping of a workspace's tasks, drag-and-drop
//! resolution into status transitions, and the session that writes
//! transitions and edits through the stores. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Pure view derivations in [`query`] and [`view`]
//! - Gesture handling in [`drag`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod drag;
pub mod ports;
pub mod query;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
