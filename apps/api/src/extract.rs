//! Request extractors that reject bad input with a 422 `ApiError`.
//!
//! axum's stock extractors answer 400/415/422 with plain-text bodies
//! depending on what went wrong. These wrappers funnel every shape error
//! into `ValidationError`, so clients always get
//! `422 {"detail": "..."}`, and no database session has been acquired yet.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use portfolio_core::validation::Validate;
use portfolio_core::{Pagination, ValidationError};

use crate::error::ApiError;

/// JSON body that has passed both deserialization and content validation.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::invalid("body", rejection.body_text()))?;

        value.validate()?;
        Ok(ValidJson(value))
    }
}

/// The `{id}` path segment of `/items/{id}`.
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub i64);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::invalid("item_id", rejection.body_text()))?;

        Ok(ItemId(id))
    }
}

/// `?skip=&limit=` query of `GET /items`.
#[derive(Debug, Clone, Copy)]
pub struct Page(pub Pagination);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(page) = Query::<Pagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::invalid("query", rejection.body_text()))?;

        Ok(Page(page))
    }
}
