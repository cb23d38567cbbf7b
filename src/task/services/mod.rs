//! Application services for task time tracking.

mod aggregator;
mod error;
mod lifecycle;

pub use aggregator::TaskAggregatorService;
pub use error::{TaskServiceError, TaskServiceResult};
pub use lifecycle::{StartTaskRequest, TaskLifecycleService};
