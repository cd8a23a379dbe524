//! Extractors whose rejections become [`ApiError`] JSON bodies instead of
//! axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::ApiError;

/// [`axum::Json`] that rejects with a 400 `{"error": ...}` body.
///
/// Covers malformed JSON, a missing `Content-Type: application/json`, and
/// bodies that do not match `T` (missing or wrongly-typed fields).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// [`axum::extract::Path`] that rejects with a 400 `{"error": ...}` body,
/// e.g. when `/users/{id}` carries a non-integer id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);
