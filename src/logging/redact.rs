//! Credential scrubbing for request and response transcripts.
//!
//! Every dump written by the transport passes through here before it reaches a
//! log sink. Header values for the access token, client id and `Authorization`
//! are replaced wholesale; `password` fields are replaced inside form-encoded
//! and JSON bodies.

use regex::Regex;
use reqwest::header::HeaderMap;
use std::borrow::Cow;
use std::sync::OnceLock;

pub const REDACTED: &str = "***";

/// Header names (lowercase) whose values never appear in a dump.
pub const SENSITIVE_HEADERS: [&str; 3] = ["x-access-token", "x-client-id", "authorization"];

pub fn is_sensitive_header(name: &str) -> bool {
    SENSITIVE_HEADERS
        .iter()
        .any(|sensitive| name.eq_ignore_ascii_case(sensitive))
}

/// Render headers one per line as `Name: value`, masking sensitive values.
pub fn render_headers(headers: &HeaderMap) -> String {
    let mut lines: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            let shown = if is_sensitive_header(name.as_str()) {
                Cow::Borrowed(REDACTED)
            } else {
                String::from_utf8_lossy(value.as_bytes())
            };
            format!("{}: {}", name.as_str(), shown)
        })
        .collect();
    lines.sort();
    lines.join("\n")
}

fn form_password() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(^|[&?\s])(password=)[^&\s]*").expect("static regex is valid")
    })
}

fn json_password() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)("password"\s*:\s*)"(?:[^"\\]|\\.)*""#).expect("static regex is valid")
    })
}

/// Replace the value of any `password` form or JSON field with the sentinel.
pub fn scrub_password(body: &str) -> Cow<'_, str> {
    if !body.to_ascii_lowercase().contains("password") {
        return Cow::Borrowed(body);
    }
    let form_replacement = format!("${{1}}${{2}}{}", REDACTED);
    let json_replacement = format!("${{1}}\"{}\"", REDACTED);
    let form_scrubbed = form_password()
        .replace_all(body, form_replacement.as_str())
        .into_owned();
    let scrubbed = json_password()
        .replace_all(&form_scrubbed, json_replacement.as_str())
        .into_owned();
    Cow::Owned(scrubbed)
}
