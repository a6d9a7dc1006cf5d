use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::AdapterErrorKind;

/// Message carried by every "no cluster leader" error.
///
/// Exported for display purposes. Use [`AdapterErrorKind::NoLeader`] (or
/// [`AdapterError::is_no_leader`]) to classify, never this text.
pub const NO_LEADER: &str = "No cluster leader";

/// Failure raised by the data-access layer when a backend request fails.
///
/// Every failure carries a kind, a presentable message and a (possibly empty)
/// list of detail strings. Values are immutable once built.
///
/// A value of kind [`AdapterErrorKind::NoLeader`] always has the message
/// [`NO_LEADER`] and no details, whichever constructor produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AdapterErrorPayload")]
#[error("{message}")]
pub struct AdapterError {
    kind: AdapterErrorKind,
    message: String,
    details: Vec<String>,
}

pub type Result<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    /// Builds an error of `kind` with its default message and no details.
    pub fn new(kind: AdapterErrorKind) -> Self {
        Self::with_details(kind, Vec::new())
    }

    /// Builds an error of `kind` with its default message.
    pub fn with_details(kind: AdapterErrorKind, details: Vec<String>) -> Self {
        Self::with_message(kind, kind.default_message(), details)
    }

    /// Builds an error with an explicit message.
    ///
    /// `NoLeader` ignores `message` and `details`.
    pub fn with_message(
        kind: AdapterErrorKind,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        if kind == AdapterErrorKind::NoLeader {
            return Self::no_leader();
        }
        Self {
            kind,
            message: message.into(),
            details,
        }
    }

    /// The "no cluster leader" error.
    pub fn no_leader() -> Self {
        Self {
            kind: AdapterErrorKind::NoLeader,
            message: NO_LEADER.to_string(),
            details: Vec::new(),
        }
    }

    pub fn generic(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Adapter, details)
    }

    pub fn invalid(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Invalid, details)
    }

    pub fn timeout() -> Self {
        Self::new(AdapterErrorKind::Timeout)
    }

    pub fn abort() -> Self {
        Self::new(AdapterErrorKind::Abort)
    }

    pub fn unauthorized(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Unauthorized, details)
    }

    pub fn forbidden(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Forbidden, details)
    }

    pub fn not_found(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::NotFound, details)
    }

    pub fn conflict(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Conflict, details)
    }

    pub fn server(details: Vec<String>) -> Self {
        Self::with_details(AdapterErrorKind::Server, details)
    }

    /// Maps a failed HTTP status onto the generic family.
    ///
    /// Leaderless responses are recognized by the transport layer, not here,
    /// so this never yields `NoLeader`.
    pub fn from_status(status: StatusCode, details: Vec<String>) -> Self {
        let kind = match status.as_u16() {
            400 | 422 => AdapterErrorKind::Invalid,
            401 => AdapterErrorKind::Unauthorized,
            403 => AdapterErrorKind::Forbidden,
            404 => AdapterErrorKind::NotFound,
            408 | 504 => AdapterErrorKind::Timeout,
            409 => AdapterErrorKind::Conflict,
            _ if status.is_server_error() => AdapterErrorKind::Server,
            _ => AdapterErrorKind::Adapter,
        };
        Self::with_details(kind, details)
    }

    pub fn kind(&self) -> AdapterErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn is(&self, kind: AdapterErrorKind) -> bool {
        self.kind == kind
    }

    /// True when the cluster had no leader to answer the request.
    pub fn is_no_leader(&self) -> bool {
        self.is(AdapterErrorKind::NoLeader)
    }
}

/// Wire shape accepted on deserialize. Missing messages fall back to the
/// kind's default.
#[derive(Deserialize)]
struct AdapterErrorPayload {
    kind: AdapterErrorKind,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

impl From<AdapterErrorPayload> for AdapterError {
    fn from(payload: AdapterErrorPayload) -> Self {
        let message = payload
            .message
            .unwrap_or_else(|| payload.kind.default_message().to_string());
        Self::with_message(payload.kind, message, payload.details)
    }
}
