//! Request extractors whose rejections render through [`ApiError`].
//!
//! The stock `axum::Json` and `axum::extract::Path` reply to bad input with
//! plain-text bodies and their own status codes; every failure leaving this
//! service must instead carry the `{"error": ...}` envelope.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::errors::ApiError;

/// JSON body extractor. A missing or undeserializable body becomes
/// [`ApiError::ValidationError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor. An unparseable id becomes
/// [`ApiError::ValidationError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
