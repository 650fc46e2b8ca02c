//! # Output Rendering
//!
//! Formats one checked identifier as a text or JSON line. Text success
//! lines go to stdout as `<checksum> : <identifier>`; text failures go to
//! stderr. JSON lines always go to stdout, one object per identifier.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use uic_core::{CheckDigit, Corpus, UicError};

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<checksum> : <identifier>` lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Which stream a rendered line belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Stdout(String),
    Stderr(String),
}

/// Machine-readable result for one identifier.
#[derive(Debug, Serialize)]
pub struct CaseReport<'a> {
    pub input: &'a str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<Corpus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<CheckDigit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The identifier as printed: every line break becomes a single space.
pub fn display_identifier(raw: &str) -> String {
    raw.replace('\n', " ")
}

/// Render the outcome of checking `raw`.
pub fn render(
    format: OutputFormat,
    raw: &str,
    corpus: Option<Corpus>,
    outcome: &Result<CheckDigit, UicError>,
) -> Result<Line> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            Ok(c) => Line::Stdout(format!("{c} : {}", display_identifier(raw))),
            Err(e) => Line::Stderr(format!("error: {e}")),
        }),
        OutputFormat::Json => {
            let report = match outcome {
                Ok(c) => CaseReport {
                    input: raw,
                    ok: true,
                    corpus,
                    check_digit: Some(*c),
                    kind: None,
                    error: None,
                },
                Err(e) => CaseReport {
                    input: raw,
                    ok: false,
                    corpus,
                    check_digit: None,
                    kind: Some(e.kind()),
                    error: Some(e.to_string()),
                },
            };
            Ok(Line::Stdout(serde_json::to_string(&report)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uic_core::validate;
    use uic_core::ValidationPolicy;

    fn check(raw: &str) -> Result<CheckDigit, UicError> {
        validate(raw, &ValidationPolicy::default())
    }

    #[test]
    fn text_success_line() {
        let line = render(OutputFormat::Text, "182 002-6", None, &check("182 002-6")).unwrap();
        assert_eq!(line, Line::Stdout("6 : 182 002-6".to_string()));
    }

    #[test]
    fn text_success_collapses_newlines() {
        let raw = "01 RIV\n83 FS\n575 0 421-8";
        let line = render(OutputFormat::Text, raw, None, &check(raw)).unwrap();
        assert_eq!(line, Line::Stdout("8 : 01 RIV 83 FS 575 0 421-8".to_string()));
    }

    #[test]
    fn text_failure_goes_to_stderr() {
        let line = render(OutputFormat::Text, "123-456-7", None, &check("123-456-7")).unwrap();
        match line {
            Line::Stderr(msg) => {
                assert!(msg.starts_with("error: "));
                assert!(msg.contains("123-456-7"));
            }
            other => panic!("expected stderr line, got {other:?}"),
        }
    }

    #[test]
    fn json_success_object() {
        let line = render(
            OutputFormat::Json,
            "000-000-0",
            Some(Corpus::European),
            &check("000-000-0"),
        )
        .unwrap();
        let Line::Stdout(json) = line else {
            panic!("json goes to stdout");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], true);
        assert_eq!(value["check_digit"], 0);
        assert_eq!(value["corpus"], "european");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn json_failure_object() {
        let line = render(OutputFormat::Json, "AMOX18S", None, &check("AMOX18S")).unwrap();
        let Line::Stdout(json) = line else {
            panic!("json goes to stdout");
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["kind"], "length_mismatch");
        assert!(value["error"].as_str().unwrap().contains("AMOX18S"));
        assert!(value.get("check_digit").is_none());
        assert!(value.get("corpus").is_none());
    }
}
