use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    #[error("Failed to read image")]
    ReadImage,

    #[error("Failed to decode image")]
    DecodeImage(#[source] image::ImageError),

    #[error("Failed to encode image")]
    EncodeImage(#[source] image::ImageError),

    #[error("Failed to process image")]
    Process(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::ReadImage | ApiError::DecodeImage(_) => StatusCode::BAD_REQUEST,
            ApiError::EncodeImage(_) | ApiError::Process(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<image_effect::ImageEffectError> for ApiError {
    fn from(e: image_effect::ImageEffectError) -> Self {
        ApiError::Process(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Process(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DecodeImage(e) | ApiError::EncodeImage(e) => log::warn!("{self}: {e}"),
            ApiError::Process(e) => log::warn!("{self}: {e}"),
            _ => log::warn!("{self}"),
        }

        (
            self.status_code(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}
