use serde::Serialize;
use thiserror::Error;

use super::error::{AdapterError, NO_LEADER};
use super::failure::AdapterFailure;
use super::kind::AdapterErrorKind;

/// The cluster had no elected leader to serve the request.
///
/// Carries no payload: every instance has kind
/// [`AdapterErrorKind::NoLeader`], message [`NO_LEADER`] and no details.
/// Converts into [`AdapterError`] so it travels through `?` like any other
/// adapter failure.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "AdapterError")]
#[error("{}", NO_LEADER)]
pub struct NoLeaderError;

impl NoLeaderError {
    pub fn new() -> Self {
        Self
    }
}

impl AdapterFailure for NoLeaderError {
    fn kind(&self) -> AdapterErrorKind {
        AdapterErrorKind::NoLeader
    }

    fn message(&self) -> &str {
        NO_LEADER
    }

    fn details(&self) -> &[String] {
        &[]
    }
}

impl From<NoLeaderError> for AdapterError {
    fn from(_: NoLeaderError) -> Self {
        AdapterError::no_leader()
    }
}

/// Narrows a generic failure; hands the error back untouched otherwise.
impl TryFrom<AdapterError> for NoLeaderError {
    type Error = AdapterError;

    fn try_from(err: AdapterError) -> Result<Self, Self::Error> {
        if err.is_no_leader() {
            Ok(NoLeaderError)
        } else {
            Err(err)
        }
    }
}
