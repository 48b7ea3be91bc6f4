//! Duplicate id handling for id-keyed views of the directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DUPLICATE_IDS_FIRST_WINS, DUPLICATE_IDS_LAST_WINS, DUPLICATE_IDS_REJECT};
use crate::error::DomainError;

/// What to do when two records share an id while building an id-keyed map.
///
/// Insertion never checks ids; the policy only applies when a unique key
/// is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateIdPolicy {
    /// Fail with [`DomainError::DuplicateKey`]
    #[default]
    Reject,
    /// Keep the earliest inserted record
    FirstWins,
    /// Keep the latest inserted record
    LastWins,
}

impl FromStr for DuplicateIdPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            DUPLICATE_IDS_REJECT => Ok(DuplicateIdPolicy::Reject),
            DUPLICATE_IDS_FIRST_WINS => Ok(DuplicateIdPolicy::FirstWins),
            DUPLICATE_IDS_LAST_WINS => Ok(DuplicateIdPolicy::LastWins),
            other => Err(DomainError::invalid_argument(format!(
                "unknown duplicate id policy: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateIdPolicy::Reject => write!(f, "{}", DUPLICATE_IDS_REJECT),
            DuplicateIdPolicy::FirstWins => write!(f, "{}", DUPLICATE_IDS_FIRST_WINS),
            DuplicateIdPolicy::LastWins => write!(f, "{}", DUPLICATE_IDS_LAST_WINS),
        }
    }
}
