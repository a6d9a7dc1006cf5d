pub mod error;
pub mod failure;
pub mod kind;
pub mod no_leader;

pub use error::{AdapterError, NO_LEADER, Result};
pub use failure::{AdapterFailure, is_no_leader, is_no_leader_error};
pub use kind::AdapterErrorKind;
pub use no_leader::NoLeaderError;
