//! Member ID - surrogate numeric identity assigned by the store
//!
//! The value comes from the database identity column at first save and is
//! immutable afterward. Ids are never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate identity of a persisted member row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    /// Create a MemberId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, MemberIdParseError> {
        s.parse::<i64>()
            .map(MemberId)
            .map_err(|_| MemberIdParseError::InvalidFormat)
    }
}

/// Error when parsing a MemberId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MemberIdParseError {
    #[error("invalid member id format")]
    InvalidFormat,
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl std::str::FromStr for MemberId {
    type Err = MemberIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberId::parse(s)
    }
}
