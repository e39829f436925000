//! Service layer module.
//!
//! Contains the identifier generators and the service that serves them.

pub mod identifier;
pub mod pattern;
pub mod schemes;

pub use identifier::IdentifierService;
