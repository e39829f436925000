//! Domain models for the business identifier worker.
//!
//! This module contains the identifier schemes, generation options, and API contracts.

pub mod dto;
pub mod scheme;

pub use dto::{ApiResponse, GenerateQuery, IdResponse, SchemeListResponse};
pub use scheme::{
    CheckRule, GenerateOptions, GenerationPolicy, RegonLength, Scheme, SchemeDescriptor,
};
