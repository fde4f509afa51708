//! Gemini client tests against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use craft_genie::core::providers::gemini::{GeminiConfig, GeminiProvider};
    use craft_genie::{
        CraftIdea, FailureKind, ProviderError, ScriptGenerator, TextGenerator, build_prompt,
        render_json,
    };
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

    fn provider_for(server: &MockServer) -> GeminiProvider {
        let config = GeminiConfig::new_google_ai("test-key").with_base_url(server.uri());
        GeminiProvider::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::text_response("## Script")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let text = provider_for(&server).generate("hello").await.unwrap();
        assert_eq!(text, "## Script");

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn test_empty_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::empty_candidates_response()),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse { .. }));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_content_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::blocked_prompt_response()),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::ContentFiltered { .. }));
        assert_eq!(FailureKind::classify(&err), FailureKind::EmptyResponse);
    }

    #[tokio::test]
    async fn test_server_error_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert_eq!(err.http_status(), Some(500));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_rate_limit_envelope() {
        let server = MockServer::start().await;
        let mut body = fixtures::error_envelope(429, "RESOURCE_EXHAUSTED", "Quota exceeded");
        body["error"]["details"] = serde_json::json!([{
            "@type": "type.googleapis.com/google.rpc.RetryInfo",
            "retryDelay": "27s"
        }]);
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(429).set_body_json(body))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::RateLimit { .. }));
        assert_eq!(err.retry_after(), Some(27));
    }

    #[tokio::test]
    async fn test_bad_key_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(400).set_body_json(fixtures::error_envelope(
                401,
                "UNAUTHENTICATED",
                "API key not valid",
            )))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::Authentication { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_dropped_server_is_transport_failure() {
        let server = MockServer::start().await;
        let provider = provider_for(&server);
        drop(server);

        let err = provider.generate("hello").await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_batch_over_http_with_mixed_results() {
        let server = MockServer::start().await;
        let broken_prompt = build_prompt(&CraftIdea::new("broken").unwrap());
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "parts": [{ "text": broken_prompt }] }]
            })))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::text_response("**Script**")),
            )
            .with_priority(2)
            .mount(&server)
            .await;

        let generator = ScriptGenerator::new(Arc::new(provider_for(&server)));
        let outcome = generator.run("quilting, broken, knitting").await.unwrap();

        let crafts: Vec<&str> = outcome
            .scripts
            .iter()
            .map(|s| s.craft_type.as_str())
            .collect();
        assert_eq!(crafts, vec!["quilting", "knitting"]);
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("An error occurred for \"broken\". Please try again.")
        );
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_api_key_never_reaches_failures_or_output() {
        let config = GeminiConfig::new_google_ai("AIzaSUPERSECRET")
            .with_base_url("http://127.0.0.1:9");
        let provider = GeminiProvider::new(config).unwrap();
        let generator = ScriptGenerator::new(Arc::new(provider));

        let outcome = generator.run("macrame").await.unwrap();

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].kind, FailureKind::Transport);
        assert!(!outcome.failures[0].detail.contains("AIzaSUPERSECRET"));
        assert!(!render_json(&outcome).unwrap().contains("AIzaSUPERSECRET"));
    }

    #[tokio::test]
    async fn test_api_key_absent_from_http_error_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = provider_for(&server).generate("hello").await.unwrap_err();
        assert!(!err.to_string().contains("test-key"));
    }
}
