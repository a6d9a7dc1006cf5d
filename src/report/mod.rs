//! Structured `tracing` events for adapter failures.
//!
//! Reporting only observes: the error is neither changed nor consumed.

pub mod config;

pub use config::ReportConfig;

use crate::core::AdapterFailure;
use tracing::{Level, event};

// `details` is only recorded when the config asks for it.
macro_rules! emit_failure {
    ($level:expr, $config:expr, $error:expr) => {
        if $config.include_details {
            event!(
                $level,
                adapter = %$config.target_label,
                kind = $error.kind().as_str(),
                error_message = $error.message(),
                detail_count = $error.details().len(),
                details = %$error.details().join("; "),
                "adapter request failed"
            )
        } else {
            event!(
                $level,
                adapter = %$config.target_label,
                kind = $error.kind().as_str(),
                error_message = $error.message(),
                detail_count = $error.details().len(),
                "adapter request failed"
            )
        }
    };
}

/// Emits one event describing `error` and returns the level it used.
pub fn report_failure(error: &dyn AdapterFailure, config: &ReportConfig) -> Level {
    let level = if error.is_transient() {
        config.transient_level
    } else {
        config.failure_level
    };

    // `event!` needs the level at compile time.
    if level == Level::ERROR {
        emit_failure!(Level::ERROR, config, error);
    } else if level == Level::WARN {
        emit_failure!(Level::WARN, config, error);
    } else if level == Level::INFO {
        emit_failure!(Level::INFO, config, error);
    } else if level == Level::DEBUG {
        emit_failure!(Level::DEBUG, config, error);
    } else {
        emit_failure!(Level::TRACE, config, error);
    }
    level
}
