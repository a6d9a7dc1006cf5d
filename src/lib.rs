// ============================================================================
// Adapter errors
// ============================================================================
//
// Failures raised by a cluster client's data-access layer, including the
// distinguished "no cluster leader" signal.

pub mod core;
pub mod prelude;
pub mod report;

// Re-export main types for convenience
pub use crate::core::{
    AdapterError, AdapterErrorKind, AdapterFailure, NO_LEADER, NoLeaderError, Result,
    is_no_leader, is_no_leader_error,
};
pub use crate::report::{ReportConfig, report_failure};
