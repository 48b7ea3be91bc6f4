//! Domain-level constants.
//!
//! These constants define business rules and fixed user-facing messages.

// =============================================================================
// Authentication
// =============================================================================

/// Message carried by the error returned when login is called without
/// a user name or a password
pub const LOGIN_NULL_ARGUMENT_MESSAGE: &str = "username or password is null";

// =============================================================================
// Duplicate ids
// =============================================================================

/// Configuration value for [`crate::DuplicateIdPolicy::Reject`]
pub const DUPLICATE_IDS_REJECT: &str = "reject";

/// Configuration value for [`crate::DuplicateIdPolicy::FirstWins`]
pub const DUPLICATE_IDS_FIRST_WINS: &str = "first-wins";

/// Configuration value for [`crate::DuplicateIdPolicy::LastWins`]
pub const DUPLICATE_IDS_LAST_WINS: &str = "last-wins";

/// All valid duplicate id policy values
pub const VALID_DUPLICATE_ID_POLICIES: &[&str] = &[
    DUPLICATE_IDS_REJECT,
    DUPLICATE_IDS_FIRST_WINS,
    DUPLICATE_IDS_LAST_WINS,
];
