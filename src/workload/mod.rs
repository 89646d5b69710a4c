//! Workload bounded context.
//!
//! Turns roster members and their assigned tasks into capacity-based
//! workload records.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
