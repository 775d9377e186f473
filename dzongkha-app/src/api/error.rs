use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dzongkha_core::CoreError;
use thiserror::Error;
use tracing::error;

use crate::api::dto::MessageOut;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] CoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        let status = match self {
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(MessageOut::new(self.to_string()))).into_response()
    }
}
