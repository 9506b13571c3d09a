//! Custom JSON extractor that returns errors as `AppError` JSON

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use crate::domain::AppError;

const INVALID_BODY_ERROR_ID: &str = "api.context.invalid_body_param.app_error";

/// Wrapper around `axum::Json` whose rejections use the application error
/// format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(AppError::new(
                "Json.from_request",
                INVALID_BODY_ERROR_ID,
                None,
                format_rejection_message(&rejection),
                rejection.status().as_u16(),
            )),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Registration {
        username: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_value() {
        let request = json_request(r#"{"username":"alice"}"#);
        let Json(registration) = Json::<Registration>::from_request(request, &())
            .await
            .unwrap();

        assert_eq!(registration.username, "alice");
    }

    #[tokio::test]
    async fn test_syntax_error_becomes_app_error() {
        let err = Json::<Registration>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();

        assert_eq!(err.id, INVALID_BODY_ERROR_ID);
        assert_eq!(err.status_code, StatusCode::BAD_REQUEST.as_u16());
        assert!(err.detailed_error.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/users")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();

        let err = Json::<Registration>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(err.status_code, StatusCode::UNSUPPORTED_MEDIA_TYPE.as_u16());
    }

    #[test]
    fn test_json_into_inner() {
        let json = Json(42);
        assert_eq!(json.into_inner(), 42);
    }
}
