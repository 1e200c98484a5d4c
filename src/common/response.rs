use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope shared by every JSON endpoint.
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

pub struct ApiSuccess<T>(pub T, pub &'static str, pub StatusCode);

impl<T> IntoResponse for ApiSuccess<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let ApiSuccess(data, message, status) = self;
        let body = ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        };
        (status, Json(body)).into_response()
    }
}

pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(message, status) = self;
        let body = ApiResponse::<()> {
            status: "error".to_string(),
            message,
            data: None,
        };
        (status, Json(body)).into_response()
    }
}
