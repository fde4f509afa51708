//! Configuration loading tests

#[cfg(test)]
mod tests {
    use craft_genie::Config;
    use craft_genie::config::{LogFormat, OutputFormat};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_file_then_env_layering() {
        let file = write_config(
            r#"
gemini:
  api_key: "file-key"
  model: "gemini-1.5-pro"
  custom_headers:
    x-goog-user-project: "crafts"
logging:
  level: "warn"
output:
  format: "markdown"
"#,
        );
        let from_file = Config::from_file(file.path()).await.unwrap();

        let env: HashMap<&str, &str> = [
            ("GEMINI_API_KEY", "env-key"),
            ("GENIE_LOG_FORMAT", "json"),
            ("GENIE_OUTPUT_FORMAT", "json"),
        ]
        .into_iter()
        .collect();
        let from_env = Config::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap();

        let config = from_file.merge(from_env);
        config.validate().unwrap();

        assert_eq!(config.gemini.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(
            config.gemini.custom_headers.get("x-goog-user-project").map(String::as_str),
            Some("crafts")
        );
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_invalid_base_url_fails_validation() {
        let file = write_config("gemini:\n  api_key: k\n  base_url: \"ftp://example.com\"\n");
        let config = Config::from_file(file.path()).await.unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Gemini config error"));
    }

    #[tokio::test]
    async fn test_unknown_output_format_rejected() {
        let file = write_config("output:\n  format: pdf\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[test]
    fn test_yaml_round_trip_keeps_sections() {
        let mut config = Config::default();
        config.gemini.api_key = Some("k".to_string());
        config.logging.format = LogFormat::Json;

        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
