//! E2E tests for the Gemini backend
//!
//! These tests make real API calls and require GEMINI_API_KEY.
//! Run with: GEMINI_API_KEY=xxx cargo test -- --ignored gemini

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use craft_genie::core::providers::gemini::create_gemini_provider_from_env;
    use craft_genie::{ScriptGenerator, TextGenerator};
    use std::sync::Arc;

    /// E2E test for a single generateContent call
    #[tokio::test]
    #[ignore]
    async fn test_gemini_generate() {
        skip_without_env!("GEMINI_API_KEY");

        let provider = create_gemini_provider_from_env().unwrap();
        let text = provider
            .generate("Say 'Hello from Gemini!' and nothing else.")
            .await;

        assert!(text.is_ok(), "Gemini generate failed: {:?}", text.err());
        assert!(!text.unwrap().trim().is_empty());
    }

    /// E2E test for a two item batch
    #[tokio::test]
    #[ignore]
    async fn test_gemini_batch() {
        skip_without_env!("GEMINI_API_KEY");

        let provider = create_gemini_provider_from_env().unwrap();
        let generator = ScriptGenerator::new(Arc::new(provider));

        let outcome = generator
            .run("paper flowers, beaded bracelet")
            .await
            .unwrap();

        assert_eq!(
            outcome.attempted(),
            2,
            "both ideas should be attempted: {:?}",
            outcome.failures
        );
        for script in &outcome.scripts {
            assert!(!script.script.is_empty());
        }
    }
}
