//! Batch run scenarios through the public API

#[cfg(test)]
mod tests {
    use crate::common::ScriptedGenerator;
    use crate::{assert_err, assert_ok};
    use craft_genie::{
        EMPTY_INPUT_MESSAGE, GenieError, ProviderError, RunEvent, RunPhase, ScriptGenerator,
        generate_scripts, render_markdown,
    };
    use std::sync::Arc;

    fn crafts(outcome: &craft_genie::RunOutcome) -> Vec<&str> {
        outcome
            .scripts
            .iter()
            .map(|s| s.craft_type.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_whitespace_input_never_contacts_backend() {
        let backend = Arc::new(ScriptedGenerator::new());
        let generator = ScriptGenerator::new(backend.clone());

        for input in ["", "  ", " , ,, "] {
            let err = assert_err!(generator.run(input).await);
            assert!(matches!(err, GenieError::EmptyInput));
            assert_eq!(err.to_string(), EMPTY_INPUT_MESSAGE);
        }

        assert_eq!(backend.calls(), 0);
        let state = generator.state();
        assert!(state.scripts.is_empty());
        assert_eq!(state.error_message.as_deref(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(state.phase, RunPhase::Idle);
    }

    #[tokio::test]
    async fn test_all_items_succeed_in_order() {
        let backend = Arc::new(
            ScriptedGenerator::new()
                .succeed("candle making", "candles")
                .succeed("pottery", "pots")
                .succeed("weaving", "looms"),
        );

        let outcome = assert_ok!(
            generate_scripts(backend.clone(), " candle making ,pottery,  weaving").await
        );

        assert_eq!(crafts(&outcome), vec!["candle making", "pottery", "weaving"]);
        let texts: Vec<&str> = outcome.scripts.iter().map(|s| s.script.as_str()).collect();
        assert_eq!(texts, vec!["candles", "pots", "looms"]);
        assert!(outcome.error_message.is_none());
        assert!(outcome.is_complete_success());
        assert_eq!(backend.calls(), 3);
    }

    #[tokio::test]
    async fn test_empty_candidate_names_item() {
        let backend = Arc::new(
            ScriptedGenerator::new()
                .succeed("A", "text_A")
                .fail("B", ProviderError::empty_response("gemini", "no candidates")),
        );

        let outcome = assert_ok!(generate_scripts(backend, "A, B").await);

        assert_eq!(crafts(&outcome), vec!["A"]);
        assert_eq!(outcome.scripts[0].script, "text_A");
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("Failed to generate script for \"B\". Please try a different prompt.")
        );
    }

    #[tokio::test]
    async fn test_latest_failure_wins_and_batch_continues() {
        let backend = Arc::new(
            ScriptedGenerator::new()
                .fail("one", ProviderError::network("gemini", "connection reset"))
                .fail("three", ProviderError::api_error("gemini", 500, "boom")),
        );

        let outcome = assert_ok!(generate_scripts(backend.clone(), "one,two,three,four").await);

        assert_eq!(backend.calls(), 4);
        assert_eq!(crafts(&outcome), vec!["two", "four"]);
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("An error occurred for \"three\". Please try again.")
        );
        let failed: Vec<(usize, &str)> = outcome
            .failures
            .iter()
            .map(|f| (f.index, f.craft_type.as_str()))
            .collect();
        assert_eq!(failed, vec![(0, "one"), (2, "three")]);
        assert_eq!(outcome.attempted(), 4);
    }

    #[tokio::test]
    async fn test_duplicates_are_independent() {
        let backend = Arc::new(ScriptedGenerator::new().succeed("A", "same"));

        let outcome = assert_ok!(generate_scripts(backend.clone(), "A,A").await);

        assert_eq!(backend.calls(), 2);
        assert_eq!(crafts(&outcome), vec!["A", "A"]);
        assert_ne!(outcome.scripts[0].id, outcome.scripts[1].id);
    }

    #[tokio::test]
    async fn test_prompts_sent_in_input_order() {
        let backend = Arc::new(ScriptedGenerator::new());
        let generator = ScriptGenerator::new(backend.clone());

        assert_ok!(generator.run("felt, beads").await);

        let prompts = backend.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("\"felt\""));
        assert!(prompts[1].contains("\"beads\""));
    }

    #[tokio::test]
    async fn test_new_run_replaces_previous_output() {
        let backend = Arc::new(
            ScriptedGenerator::new().fail("bad", ProviderError::timeout("gemini", "slow")),
        );
        let generator = ScriptGenerator::new(backend);

        let first = assert_ok!(generator.run("bad, good").await);
        assert!(first.error_message.is_some());

        let second = assert_ok!(generator.run("fine").await);
        assert_eq!(crafts(&second), vec!["fine"]);
        assert!(second.error_message.is_none());

        let state = generator.state();
        assert_eq!(state.scripts.len(), 1);
        assert!(state.error_message.is_none());
        assert!(state.failures.is_empty());
    }

    #[tokio::test]
    async fn test_event_stream_describes_run() {
        let backend = Arc::new(
            ScriptedGenerator::new().fail("y", ProviderError::network("gemini", "down")),
        );
        let generator = ScriptGenerator::new(backend);
        let mut events = generator.subscribe();

        assert_ok!(generator.run("x, y").await);

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], RunEvent::Started { total: 2 });
        assert!(matches!(seen[1], RunEvent::ItemSucceeded { index: 0, .. }));
        assert!(matches!(seen[2], RunEvent::ItemFailed { index: 1, .. }));
        assert_eq!(seen[3], RunEvent::Completed);
    }

    #[tokio::test]
    async fn test_rendered_markdown_for_run() {
        let backend = Arc::new(
            ScriptedGenerator::new()
                .succeed("tie dye", "**Hook:** Colors!")
                .succeed("embroidery", "**Hook:** Stitches!"),
        );

        let outcome = assert_ok!(generate_scripts(backend, "tie dye, embroidery").await);
        let rendered = render_markdown(&outcome.scripts);

        assert!(rendered.starts_with("# Your AI-Generated Video Script(s)"));
        assert!(rendered.contains("## Script for: \"tie dye\"\n\n**Hook:** Colors!"));
        assert!(rendered.contains("## Script for: \"embroidery\""));
    }
}
