//! Everything a request layer or its callers usually need in one import.

pub use crate::core::{
    AdapterError, AdapterErrorKind, AdapterFailure, NO_LEADER, NoLeaderError, is_no_leader,
    is_no_leader_error,
};
pub use crate::report::{ReportConfig, report_failure};
