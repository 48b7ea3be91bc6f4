//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user directory service and its gateways are built on these types.

pub mod constants;
pub mod error;
pub mod policy;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult, GatewayError};
pub use policy::DuplicateIdPolicy;
pub use user::User;
