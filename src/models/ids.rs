//! Strongly-typed transaction identifier
//!
//! Wraps a v4 UUID. The display form is a short `txn-` prefixed string, which
//! is also what the history view prints and what `delete` accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "txn-";
const SHORT_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string (with or without the display prefix)
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// First eight hex digits of the UUID
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..SHORT_LEN].to_string()
    }

    /// Whether `identifier` names this ID: the full UUID, the display form,
    /// or a hex prefix of at least eight characters
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        let identifier = identifier.strip_prefix(DISPLAY_PREFIX).unwrap_or(identifier);
        if identifier.len() < SHORT_LEN {
            return false;
        }

        let hyphenated = self.0.hyphenated().to_string();
        let simple = self.0.simple().to_string();
        let needle = identifier.to_ascii_lowercase();
        hyphenated.starts_with(&needle) || simple.starts_with(&needle)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.short())
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
