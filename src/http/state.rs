//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the service layer and remain testable without a real store.

use crate::task::services::{TaskAggregatorService, TaskLifecycleService};
use crate::user::services::UserDirectoryService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User directory service.
    pub directory: UserDirectoryService,
    /// Task lifecycle service.
    pub lifecycle: TaskLifecycleService,
    /// Task aggregation service.
    pub aggregator: TaskAggregatorService,
}
