use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of every adapter failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterErrorKind {
    /// Unclassified adapter failure.
    Adapter,
    /// The backend rejected the request payload.
    Invalid,
    Timeout,
    Abort,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    /// The cluster had no elected leader to serve the request.
    NoLeader,
}

impl AdapterErrorKind {
    pub const ALL: [AdapterErrorKind; 10] = [
        Self::Adapter,
        Self::Invalid,
        Self::Timeout,
        Self::Abort,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::Conflict,
        Self::Server,
        Self::NoLeader,
    ];

    /// Stable tag, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adapter => "adapter",
            Self::Invalid => "invalid",
            Self::Timeout => "timeout",
            Self::Abort => "abort",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Server => "server",
            Self::NoLeader => "no_leader",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::Adapter => "Adapter operation failed",
            Self::Invalid => "The adapter rejected the commit because it was invalid",
            Self::Timeout => "The adapter operation timed out",
            Self::Abort => "The adapter operation was aborted",
            Self::Unauthorized => "The adapter operation is unauthorized",
            Self::Forbidden => "The adapter operation is forbidden",
            Self::NotFound => "The adapter could not find the resource",
            Self::Conflict => "The adapter operation failed due to a conflict",
            Self::Server => "The adapter operation failed due to a server error",
            Self::NoLeader => super::error::NO_LEADER,
        }
    }

    /// Whether waiting may change the outcome of the same request.
    ///
    /// Only a hint for callers; nothing in this crate retries. `Abort` is a
    /// cancelled request, so it does not count.
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Timeout | Self::NoLeader)
    }
}

impl fmt::Display for AdapterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tags_are_unique() {
        let tags: HashSet<_> = AdapterErrorKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(tags.len(), AdapterErrorKind::ALL.len());
    }

    #[test]
    fn transient_kinds() {
        let transient: Vec<_> = AdapterErrorKind::ALL
            .into_iter()
            .filter(|k| k.is_transient())
            .collect();
        assert_eq!(
            transient,
            vec![
                AdapterErrorKind::Timeout,
                AdapterErrorKind::NoLeader
            ]
        );
    }

    #[test]
    fn no_leader_default_message() {
        assert_eq!(AdapterErrorKind::NoLeader.default_message(), "No cluster leader");
        assert_eq!(AdapterErrorKind::NoLeader.to_string(), "no_leader");
    }
}
