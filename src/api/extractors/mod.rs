//! Request extractors that reject with [`AppError`](crate::error::AppError).

pub mod query;

pub use query::ApiQuery;
