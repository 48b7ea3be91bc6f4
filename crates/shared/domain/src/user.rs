//! User domain entity.

use serde::{Deserialize, Serialize};

/// User record held by the directory.
///
/// Immutable once built: fields are only reachable through accessors.
/// The password is compared by plain string equality and never leaves the
/// value through `Debug` or serialization.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: i32,
    user_name: String,
    #[serde(skip_serializing)]
    password: String,
}

impl User {
    /// Create a user record
    pub fn of(id: i32, user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            password: password.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Check both credentials with exact, case-sensitive equality
    pub fn matches_credentials(&self, user_name: &str, password: &str) -> bool {
        self.user_name == user_name && self.password == password
    }
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
