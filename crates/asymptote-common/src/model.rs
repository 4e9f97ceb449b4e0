//! Wire types exchanged between the page and the `/analyze` endpoint.
//!
//! Field names on the wire are camelCase (`timeComplexity`, `bestCase`, …)
//! because the analysis JSON is produced by a language model prompted with
//! those exact keys.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{AsymptoteError, Result};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw source text. Missing or `null` on the wire decodes to an empty
    /// string so the server can answer with its own "no code" error instead
    /// of a 422.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Best / average / worst case labels for one resource (time or space).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityTriple {
    #[serde(default, deserialize_with = "lenient_label")]
    pub best_case: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub average_case: String,
    #[serde(default, deserialize_with = "lenient_label")]
    pub worst_case: String,
}

impl ComplexityTriple {
    pub fn new(
        best_case: impl Into<String>,
        average_case: impl Into<String>,
        worst_case: impl Into<String>,
    ) -> Self {
        Self {
            best_case: best_case.into(),
            average_case: average_case.into(),
            worst_case: worst_case.into(),
        }
    }

    /// Same label for all three cases.
    pub fn uniform(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label.clone(), label)
    }
}

/// Parsed analysis returned by `/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(deserialize_with = "lenient_triple")]
    pub time_complexity: ComplexityTriple,
    #[serde(default, deserialize_with = "lenient_triple")]
    pub space_complexity: ComplexityTriple,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub optimized_code: Option<String>,
}

impl AnalysisResponse {
    /// Decode an arbitrary JSON body.
    ///
    /// A body without a usable `timeComplexity` is a schema failure
    /// ([`AsymptoteError::MissingField`]) rather than a decode error, so the
    /// caller can tell "the service answered something else" apart from
    /// "the service answered garbage". Past that check nothing is rejected:
    /// labels that are not strings are shown as their JSON text, `null`
    /// becomes an empty label, and a triple that is not an object plots as
    /// empty labels.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(ref map) = value else {
            return Err(AsymptoteError::NotAnObject(json_kind(&value)));
        };
        match map.get("timeComplexity") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                return Err(AsymptoteError::MissingField("timeComplexity"))
            }
            Some(Value::String(s)) if s.is_empty() => {
                return Err(AsymptoteError::MissingField("timeComplexity"))
            }
            _ => {}
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }
}

/// Text shown for a label or summary of any JSON type.
fn display_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_label<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(display_text(other)),
    })
}

fn lenient_triple<'de, D>(deserializer: D) -> std::result::Result<ComplexityTriple, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(serde::de::Error::custom),
        _ => Ok(ComplexityTriple::default()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The closed set of growth classes the charts know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityLabel {
    Constant,
    Linear,
    Quadratic,
    Unrecognized,
}

impl ComplexityLabel {
    /// Exact match only; `"O(N)"` or `"O(n²)"` are unrecognized.
    pub fn parse(label: &str) -> Self {
        match label {
            "O(1)" => Self::Constant,
            "O(n)" => Self::Linear,
            "O(n^2)" => Self::Quadratic,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Linear => "O(n)",
            Self::Quadratic => "O(n^2)",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Synthetic cost at input size `n`.
    pub fn growth(&self, n: u64) -> u64 {
        match self {
            Self::Constant => 1,
            Self::Linear => n,
            Self::Quadratic => n * n,
            Self::Unrecognized => 0,
        }
    }
}

impl From<&str> for ComplexityLabel {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_serializes_code_field() {
        let body = serde_json::to_value(AnalysisRequest::new("x = 1")).unwrap();
        assert_eq!(body, json!({"code": "x = 1"}));
    }

    #[test]
    fn test_request_without_code_decodes_empty() {
        let req: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(req.code.is_empty());
    }

    #[test]
    fn test_response_decodes_camel_case() {
        let resp = AnalysisResponse::from_value(json!({
            "timeComplexity":  {"bestCase": "O(1)", "averageCase": "O(n)", "worstCase": "O(n^2)"},
            "spaceComplexity": {"bestCase": "O(1)", "averageCase": "O(1)", "worstCase": "O(n)"},
            "summary": "Nested loop",
        }))
        .unwrap();

        assert_eq!(resp.time_complexity, ComplexityTriple::new("O(1)", "O(n)", "O(n^2)"));
        assert_eq!(resp.space_complexity.worst_case, "O(n)");
        assert_eq!(resp.summary.as_deref(), Some("Nested loop"));
        assert!(resp.optimized_code.is_none());
    }

    #[test]
    fn test_response_missing_time_complexity_is_schema_error() {
        let err = AnalysisResponse::from_value(json!({})).unwrap_err();
        assert!(matches!(err, AsymptoteError::MissingField("timeComplexity")));

        let err = AnalysisResponse::from_value(json!({"timeComplexity": null})).unwrap_err();
        assert!(matches!(err, AsymptoteError::MissingField(_)));

        let err = AnalysisResponse::from_value(json!({"error": "Could not analyze the code."}))
            .unwrap_err();
        assert!(matches!(err, AsymptoteError::MissingField(_)));
    }

    #[test]
    fn test_response_non_object_rejected() {
        let err = AnalysisResponse::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, AsymptoteError::NotAnObject("an array")));
    }

    #[test]
    fn test_response_missing_space_complexity_defaults_empty() {
        let resp = AnalysisResponse::from_json(
            r#"{"timeComplexity": {"bestCase": "O(n)", "averageCase": "O(n)", "worstCase": "O(n)"}}"#,
        )
        .unwrap();
        assert_eq!(resp.space_complexity, ComplexityTriple::default());
    }

    #[test]
    fn test_request_with_null_code_decodes_empty() {
        let req: AnalysisRequest = serde_json::from_str(r#"{"code": null}"#).unwrap();
        assert!(req.code.is_empty());
    }

    #[test]
    fn test_response_non_string_labels_still_render() {
        let resp = AnalysisResponse::from_value(json!({
            "timeComplexity":  {"bestCase": "O(n)", "averageCase": 1, "worstCase": null},
            "spaceComplexity": {"bestCase": "O(1)", "averageCase": "O(1)", "worstCase": "O(1)"},
            "summary": null,
        }))
        .unwrap();

        assert_eq!(resp.time_complexity, ComplexityTriple::new("O(n)", "1", ""));
        assert_eq!(resp.space_complexity, ComplexityTriple::uniform("O(1)"));
        assert!(resp.summary.is_none());
    }

    #[test]
    fn test_response_space_complexity_as_string_plots_empty() {
        let resp = AnalysisResponse::from_value(json!({
            "timeComplexity":  {"bestCase": "O(n)", "averageCase": "O(n)", "worstCase": "O(n)"},
            "spaceComplexity": "O(1)",
            "summary": "Linear scan",
            "optimizedCode": 42,
        }))
        .unwrap();

        assert_eq!(resp.time_complexity, ComplexityTriple::uniform("O(n)"));
        assert_eq!(resp.space_complexity, ComplexityTriple::default());
        assert_eq!(resp.optimized_code.as_deref(), Some("42"));
    }

    #[test]
    fn test_response_invalid_json_is_serialization_error() {
        let err = AnalysisResponse::from_json("<html>502</html>").unwrap_err();
        assert!(matches!(err, AsymptoteError::Serialization(_)));
    }

    #[test]
    fn test_label_parse_is_exact() {
        assert_eq!(ComplexityLabel::parse("O(1)"), ComplexityLabel::Constant);
        assert_eq!(ComplexityLabel::parse("O(n)"), ComplexityLabel::Linear);
        assert_eq!(ComplexityLabel::parse("O(n^2)"), ComplexityLabel::Quadratic);
        assert_eq!(ComplexityLabel::parse("O(N)"), ComplexityLabel::Unrecognized);
        assert_eq!(ComplexityLabel::parse("O(log n)"), ComplexityLabel::Unrecognized);
        assert_eq!(ComplexityLabel::parse(""), ComplexityLabel::Unrecognized);
    }
}
