//! Service layer for workload aggregation.

mod aggregator;
mod report;

pub use aggregator::aggregate;
pub use report::{WorkloadService, WorkloadServiceError, WorkloadServiceResult};
