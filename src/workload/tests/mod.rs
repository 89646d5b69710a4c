//! Unit tests for the workload context.
