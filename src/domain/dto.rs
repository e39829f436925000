//! Data Transfer Objects for API requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GenerateOptions, SchemeDescriptor};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Query parameters for identifier generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuery {
    /// Number of identifiers to generate (default: 1).
    #[serde(default = "default_count")]
    pub count: u32,

    /// Insert separators where the scheme defines them.
    #[serde(default)]
    pub formatted: bool,

    /// Requested length, for schemes with more than one.
    #[serde(default)]
    pub length: Option<u32>,
}

const fn default_count() -> u32 {
    1
}

impl GenerateQuery {
    /// Generation options carried by this query.
    #[must_use]
    pub const fn options(&self) -> GenerateOptions {
        GenerateOptions {
            formatted: self.formatted,
            length: self.length,
        }
    }
}

/// Response with a list of generated identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse {
    /// List of generated identifiers.
    pub ids: Vec<String>,
}

impl IdResponse {
    /// Create a new identifier response.
    #[must_use]
    pub const fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

/// Response listing the supported schemes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeListResponse {
    /// Scheme descriptors.
    pub schemes: Vec<SchemeDescriptor>,
}
