//! User Service Library
//!
//! This crate provides an in-memory user directory with credential lookup.
//! Deleting users from a backing store is delegated to an injected
//! [`gateway::DeletionGateway`].

pub mod gateway;
pub mod service;

pub use gateway::{DeletionGateway, SpyDeletionGateway, UnavailableGateway};
pub use service::UserDirectory;

#[cfg(any(test, feature = "test-utils"))]
pub use gateway::MockDeletionGateway;
