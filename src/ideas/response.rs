use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::GenerationError;

static OPENING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").unwrap());
static CLOSING_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n?```$").unwrap());

/// A drafted talk. Both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIdea {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

/// Remove surrounding whitespace and a markdown code fence, if the reply has one.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let start = OPENING_FENCE_RE
        .find(trimmed)
        .map(|m| m.end())
        .unwrap_or(0);
    let rest = &trimmed[start..];
    let end = CLOSING_FENCE_RE
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    rest[..end].trim()
}

/// Parse reply text into an idea, rejecting anything that is not a complete record.
pub fn parse_idea(text: &str) -> Result<GeneratedIdea, GenerationError> {
    let cleaned = strip_code_fence(text);
    let parsed: Value = serde_json::from_str(cleaned)
        .map_err(|e| GenerationError::MalformedResponse(format!("invalid JSON: {e}")))?;
    let Value::Object(mut obj) = parsed else {
        return Err(GenerationError::MalformedResponse(
            "reply is not a JSON object".to_string(),
        ));
    };

    let title = required_string(obj.remove("title"), "title")?;
    let abstract_text = required_string(obj.remove("abstract"), "abstract")?;

    Ok(GeneratedIdea {
        title,
        abstract_text,
    })
}

fn required_string(value: Option<Value>, name: &str) -> Result<String, GenerationError> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(GenerationError::MalformedResponse(format!(
            "empty field: {name}"
        ))),
        Some(_) => Err(GenerationError::MalformedResponse(format!(
            "field is not a string: {name}"
        ))),
        None => Err(GenerationError::MalformedResponse(format!(
            "missing field: {name}"
        ))),
    }
}

/// Pull the reply text out of a `generateContent` response.
pub fn extract_text(body: &Value) -> Result<String, GenerationError> {
    let parts = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| GenerationError::MalformedResponse("no candidate content".to_string()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(GenerationError::MalformedResponse(
            "candidate has no text".to_string(),
        ));
    }
    Ok(text)
}
