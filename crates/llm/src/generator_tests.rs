#[cfg(test)]
mod tests {
    use crate::client::LlmClient;
    use crate::generator::{build_prompt, AnswerGenerator};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_generator(server: &MockServer) -> AnswerGenerator {
        let client = LlmClient::new("test-key".to_owned(), server.uri()).unwrap();
        AnswerGenerator::new(client, "primary-model".to_owned(), "fallback-model".to_owned())
    }

    fn answer_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{
                "message": { "content": content, "role": "assistant" }
            }]
        })
    }

    #[test]
    fn test_plain_prompt_template() {
        let prompt = build_prompt("Is it getting warmer?", None);
        assert_eq!(prompt, "Answer this climate question briefly and clearly: Is it getting warmer?");
    }

    #[test]
    fn test_enriched_prompt_contains_summary_verbatim() {
        let summary = "In 2020, the global temperature anomaly was approximately 1.01°C \
                       relative to 1951–1980 average.";
        let prompt = build_prompt("How warm was 2020?", Some(summary));
        assert!(prompt.contains(summary));
        assert!(prompt.starts_with("Based on the following climate data:"));
        assert!(prompt.contains("Now answer this query clearly: How warm was 2020?"));
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let server = MockServer::start().await;
        let generator = make_generator(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "primary-model"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("  the answer  ")))
            .expect(1)
            .mount(&server)
            .await;

        let answer = generator.generate("a question", None).await.unwrap();
        assert_eq!(answer, "the answer");
    }

    #[tokio::test]
    async fn test_primary_failure_invokes_fallback_with_same_prompt() {
        let server = MockServer::start().await;
        let generator = make_generator(&server);
        let expected_prompt = build_prompt("How warm was 2020?", Some("summary text"));

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "primary-model"})))
            .respond_with(ResponseTemplate::new(500).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "fallback-model",
                "messages": [{"role": "user", "content": expected_prompt}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("fallback answer")))
            .expect(1)
            .mount(&server)
            .await;

        let answer = generator.generate("How warm was 2020?", Some("summary text")).await.unwrap();
        assert_eq!(answer, "fallback answer");
    }

    #[tokio::test]
    async fn test_fallback_failure_propagates() {
        let server = MockServer::start().await;
        let generator = make_generator(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .expect(2)
            .mount(&server)
            .await;

        let result = generator.generate("a question", None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_malformed_primary_body_triggers_fallback() {
        let server = MockServer::start().await;
        let generator = make_generator(&server);

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "primary-model"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("garbage"))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"model": "fallback-model"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("recovered")))
            .mount(&server)
            .await;

        let answer = generator.generate("a question", None).await.unwrap();
        assert_eq!(answer, "recovered");
    }
}
