use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// JSON error for the `/api` routes.
#[derive(Debug)]
pub enum ApiError {
    Domain {
        error: jexla_shared::Error,
        detail: &'static str,
    },
    Body(JsonRejection),
}

impl ApiError {
    pub fn with_detail(self, detail: &'static str) -> Self {
        match self {
            ApiError::Domain { error, .. } => ApiError::Domain { error, detail },
            body => body,
        }
    }
}

impl From<jexla_shared::Error> for ApiError {
    fn from(error: jexla_shared::Error) -> Self {
        ApiError::Domain {
            error,
            detail: "Internal server error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (error, detail) = match self {
            ApiError::Domain { error, detail } => (error, detail),
            ApiError::Body(rejection) => {
                // Bad syntax and missing fields are both an unprocessable body.
                let status = match rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    _ => rejection.status(),
                };

                return (status, Json(json!({ "detail": rejection.body_text() }))).into_response();
            }
        };

        match error {
            jexla_shared::Error::Validate(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            jexla_shared::Error::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not found" })),
            )
                .into_response(),
            jexla_shared::Error::Server(err) => {
                tracing::error!("{detail}: {err}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": detail })),
                )
                    .into_response()
            }
            jexla_shared::Error::Unknown(err) => {
                tracing::error!("{detail}: {err:?}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": detail })),
                )
                    .into_response()
            }
        }
    }
}
