//! Deletion gateway port and its in-process adapters.
//!
//! Removing a user from a backing store is delegated to a [`DeletionGateway`].
//! The directory never interprets the answer or the failure it gets back.

mod spy;
mod unavailable;

use domain::GatewayError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use spy::SpyDeletionGateway;
pub use unavailable::UnavailableGateway;

/// Capability to delete a user record from a backing store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait DeletionGateway: Send + Sync {
    /// Delete the user with the given id, reporting whether anything was removed
    fn delete(&self, id: i32) -> Result<bool, GatewayError>;
}
