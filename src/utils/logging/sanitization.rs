use once_cell::sync::Lazy;
use regex::Regex;

static KEY_PARAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([?&](?:key|api_key)=)[^&#\s]*").expect("valid regex")
});

static SECRET_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(api[_-]?key["']?\s*[:=]\s*["']?)[A-Za-z0-9\-_.]+"#)
        .expect("valid regex")
});

const REDACTED: &str = "***REDACTED***";

pub struct Sanitization;

impl Sanitization {
    /// Replace the `key` query parameter of a request URL
    pub fn redact_url(url: &str) -> String {
        KEY_PARAM
            .replace_all(url, |caps: &regex::Captures<'_>| {
                format!("{}{}", &caps[1], REDACTED)
            })
            .into_owned()
    }

    /// Mask `api_key: ...` style fields in free text
    pub fn sanitize_log_data(data: &str) -> String {
        let redacted = Self::redact_url(data);
        SECRET_FIELD
            .replace_all(&redacted, |caps: &regex::Captures<'_>| {
                format!("{}{}", &caps[1], REDACTED)
            })
            .into_owned()
    }
}
