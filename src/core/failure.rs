use std::error::Error as StdError;

use super::error::AdapterError;
use super::kind::AdapterErrorKind;
use super::no_leader::NoLeaderError;

/// Capabilities every adapter failure exposes to its consumers.
///
/// Code written against `&dyn AdapterFailure` handles any member of the
/// family, including [`NoLeaderError`].
pub trait AdapterFailure: StdError + Send + Sync {
    fn kind(&self) -> AdapterErrorKind;

    /// Presentable message.
    fn message(&self) -> &str;

    fn details(&self) -> &[String];

    fn is_no_leader(&self) -> bool {
        self.kind() == AdapterErrorKind::NoLeader
    }

    fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }
}

impl AdapterFailure for AdapterError {
    fn kind(&self) -> AdapterErrorKind {
        AdapterError::kind(self)
    }

    fn message(&self) -> &str {
        AdapterError::message(self)
    }

    fn details(&self) -> &[String] {
        AdapterError::details(self)
    }
}

/// Classifies any adapter failure by discriminant.
pub fn is_no_leader(error: &dyn AdapterFailure) -> bool {
    error.is_no_leader()
}

/// Classifies a type-erased error, following its `source()` chain.
///
/// Recognizes both [`NoLeaderError`] and an [`AdapterError`] of kind
/// `NoLeader`, so wrapped failures are found too.
pub fn is_no_leader_error(error: &(dyn StdError + 'static)) -> bool {
    std::iter::successors(Some(error), |&err| err.source()).any(|err| {
        err.is::<NoLeaderError>()
            || err
                .downcast_ref::<AdapterError>()
                .is_some_and(AdapterError::is_no_leader)
    })
}
