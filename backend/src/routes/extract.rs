//! Request extractors
//!
//! [`ApiJson`] wraps axum's `Json` so body rejections come back as the
//! usual `{"error": {...}}` payload with status 400.

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
