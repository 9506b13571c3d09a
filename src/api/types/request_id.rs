//! Request id extractor

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Value of the `x-request-id` header, empty when the request carries none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Stamp the id onto an error leaving the handler
    pub fn tag(&self, err: AppError) -> AppError {
        if self.0.is_empty() {
            err
        } else {
            err.with_request_id(self.0.clone())
        }
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> RequestId {
        let (mut parts, _) = request.into_parts();
        RequestId::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_reads_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "req-42")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await, RequestId("req-42".to_string()));
    }

    #[tokio::test]
    async fn test_missing_header() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await, RequestId::default());
    }

    #[test]
    fn test_tag() {
        let err = AppError::internal("Test", "app.test.app_error", "boom");

        let tagged = RequestId("req-1".to_string()).tag(err.clone());
        assert_eq!(tagged.request_id, "req-1");

        let untouched = RequestId::default().tag(err);
        assert!(untouched.request_id.is_empty());
    }
}
