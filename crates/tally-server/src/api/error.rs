use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tally_core::error::{ClientCode, TallyError};

/// HTTP wrapper around [`TallyError`].
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BelowZero | ClientCode::BadConfig => StatusCode::BAD_REQUEST,
            ClientCode::Overflow => StatusCode::CONFLICT,
            ClientCode::UnsupportedVersion | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        tracing::warn!(%status, code, err = %self.0, "request rejected");
        let body = Json(json!({
            "error": code,
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use http_body_util::BodyExt;
    use serde_json::Value;

    use super::*;

    async fn render(err: TallyError) -> (StatusCode, Value) {
        let resp = ApiError(err).into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn overflow_maps_to_conflict() {
        let (status, body) = render(TallyError::Overflow).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "OVERFLOW");
        assert_eq!(body["message"], "counter overflow");
    }

    #[tokio::test]
    async fn below_zero_maps_to_bad_request() {
        let (status, body) = render(TallyError::BelowZero).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "BELOW_ZERO");
    }

    #[tokio::test]
    async fn internal_maps_to_500() {
        let (status, body) = render(TallyError::Internal("boom".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "INTERNAL");
        assert_eq!(body["message"], "internal: boom");
    }
}
