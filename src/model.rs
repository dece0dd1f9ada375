//! The parsed generation payload: analysis, architecture, documentation.
//!
//! The service returns `{"response": [analysis, architecture, documentation]}`
//! — an ordered 3-element array, decoded here into one [`GenerationResult`].
//! Field policy: every field is `#[serde(default)]`, so a key the service
//! omitted deserializes to an empty string and displays as nothing, never as
//! an error. Unknown keys are ignored. The envelope check (key present,
//! exactly three elements) is strict; the field contents are not.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};

/// Code-analysis section of a generation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub key_components: String,
    #[serde(default)]
    pub dependencies: String,
    #[serde(default)]
    pub config: String,
}

/// Architecture-overview section of a generation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub components: String,
    #[serde(default)]
    pub data_flow: String,
    #[serde(default)]
    pub design: String,
}

/// Documentation section: a single markdown string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(default)]
    pub markdown: String,
}

/// The complete parsed response payload.
///
/// Always either fully present or absent — the store never holds a partial
/// result, because this struct is only constructed after the whole envelope
/// decoded successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub analysis: Analysis,
    pub architecture: Architecture,
    pub documentation: Documentation,
}

/// The request body sent to the service.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
}

impl GenerationResult {
    /// Decode the service response body into a result.
    ///
    /// Accepts only `{"response": [a, b, c]}` with exactly three elements in
    /// document order. Anything else — non-JSON input upstream, a missing
    /// key, a 2- or 4-element array, elements that are not objects — is a
    /// [`GenerationError::MalformedResponse`] naming what was wrong.
    pub fn from_response_body(body: &serde_json::Value) -> Result<Self, GenerationError> {
        let response = body
            .get("response")
            .ok_or_else(|| GenerationError::MalformedResponse {
                detail: "missing \"response\" key".to_string(),
            })?;

        let parts = response
            .as_array()
            .ok_or_else(|| GenerationError::MalformedResponse {
                detail: format!("\"response\" is not an array (got {})", json_kind(response)),
            })?;

        if parts.len() != 3 {
            return Err(GenerationError::MalformedResponse {
                detail: format!("expected 3 elements in \"response\", got {}", parts.len()),
            });
        }

        let analysis: Analysis = decode_part(&parts[0], "analysis")?;
        let architecture: Architecture = decode_part(&parts[1], "architecture")?;
        let documentation: Documentation = decode_part(&parts[2], "documentation")?;

        Ok(Self {
            analysis,
            architecture,
            documentation,
        })
    }
}

fn decode_part<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    name: &str,
) -> Result<T, GenerationError> {
    serde_json::from_value(value.clone()).map_err(|e| GenerationError::MalformedResponse {
        detail: format!("{name} element is not the expected shape: {e}"),
    })
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_triple() {
        let body = json!({
            "response": [
                {"purpose": "p", "key_components": "k", "dependencies": "d", "config": "c"},
                {"pattern": "layered", "components": "x", "data_flow": "y", "design": "z"},
                {"markdown": "# Title"}
            ]
        });
        let r = GenerationResult::from_response_body(&body).unwrap();
        assert_eq!(r.analysis.purpose, "p");
        assert_eq!(r.architecture.pattern, "layered");
        assert_eq!(r.documentation.markdown, "# Title");
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let body = json!({
            "response": [{"purpose": "A function stub"}, {"pattern": "Procedural"}, {}]
        });
        let r = GenerationResult::from_response_body(&body).unwrap();
        assert_eq!(r.analysis.purpose, "A function stub");
        assert_eq!(r.analysis.key_components, "");
        assert_eq!(r.analysis.dependencies, "");
        assert_eq!(r.architecture.data_flow, "");
        assert_eq!(r.documentation.markdown, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = json!({
            "response": [
                {"purpose": "p", "confidence": 0.9},
                {"pattern": "MVC"},
                {"markdown": "m", "word_count": 2}
            ]
        });
        assert!(GenerationResult::from_response_body(&body).is_ok());
    }

    #[test]
    fn missing_response_key_is_malformed() {
        let body = json!({"result": []});
        let err = GenerationResult::from_response_body(&body).unwrap_err();
        assert!(err.to_string().contains("missing \"response\" key"));
    }

    #[test]
    fn two_element_array_is_malformed() {
        let body = json!({"response": [{}, {}]});
        let err = GenerationResult::from_response_body(&body).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn four_element_array_is_malformed() {
        let body = json!({"response": [{}, {}, {}, {}]});
        assert!(GenerationResult::from_response_body(&body).is_err());
    }

    #[test]
    fn non_array_response_is_malformed() {
        let body = json!({"response": "three sections"});
        let err = GenerationResult::from_response_body(&body).unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn non_object_element_is_malformed() {
        let body = json!({"response": [42, {}, {}]});
        let err = GenerationResult::from_response_body(&body).unwrap_err();
        assert!(err.to_string().contains("analysis"));
    }
}
