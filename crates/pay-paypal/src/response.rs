//! # Response Normalizer
//!
//! Turns a raw `reqwest::Response` into an [`UpstreamResponse`].

use pay_core::{PaymentError, PaymentResult, UpstreamResponse};
use reqwest::Response;
use tracing::{debug, error};

/// Read the whole body as text, then parse it.
///
/// The status code is kept as-is; provider-level errors (4xx/5xx with a JSON
/// body) are a successful normalization.
pub async fn normalize(response: Response) -> PaymentResult<UpstreamResponse> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    debug!(status, bytes = text.len(), "Received upstream response");

    UpstreamResponse::from_parts(status, &text).map_err(|e| {
        error!(status, "Failed to parse upstream response: {}", e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch(template: ResponseTemplate) -> PaymentResult<UpstreamResponse> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(template)
            .mount(&server)
            .await;

        let response = reqwest::get(server.uri()).await.unwrap();
        normalize(response).await
    }

    #[tokio::test]
    async fn test_empty_body() {
        let resp = fetch(ResponseTemplate::new(204)).await.unwrap();
        assert_eq!(resp.status_code, 204);
        assert_eq!(resp.parsed_body, json!({}));
    }

    #[tokio::test]
    async fn test_json_body_with_error_status() {
        let resp = fetch(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_token" })),
        )
        .await
        .unwrap();
        assert_eq!(resp.status_code, 401);
        assert_eq!(resp.parsed_body["error"], "invalid_token");
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let err = fetch(ResponseTemplate::new(200).set_body_string("not json"))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::ResponseParse(_)));
    }
}
