//! Query string extractor with envelope-shaped rejections.

use axum::{extract::FromRequestParts, extract::Query, http::request::Parts};
use serde::de::DeserializeOwned;
use std::future::Future;

use crate::error::AppError;

/// Query parameters deserialized into `T`.
///
/// Unlike [`Query`], a malformed query string becomes [`AppError::BadRequest`], so
/// callers get the JSON error envelope instead of a plain-text body.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = Query::<T>::try_from_uri(&parts.uri)
            .map(|Query(value)| Self(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()));
        std::future::ready(result)
    }
}
