//! Sprintboard: task board coordination and workload balancing.
//!
//! This crate provides the algorithmic core of a sprint board: filtering and
//! sorting task collections, resolving drag-and-drop gestures into status
//! transitions that cascade project and space, and aggregating per-member
//! workload into capacity bands.
//!
//! # Architecture
//!
//! Sprintboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`board`]: Tasks, statuses, the filter/sort engine and drag handling
//! - [`workload`]: Roster members and capacity-based workload reports
//! - [`config`]: Board settings and the workload policy

pub mod board;
pub mod config;
pub mod workload;
