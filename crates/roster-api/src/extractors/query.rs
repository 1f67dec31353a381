//! Query-string extractor with JSON rejections.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use roster_core::error::AppError;

use crate::error::ApiError;

/// Like [`Query`], but a malformed query string is rejected with an
/// `INVALID_ARGUMENT` body instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::invalid_argument(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}
