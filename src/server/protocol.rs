//! Wire protocol
//!
//! One JSON object per line. Requests are tagged by `"action"`; every response
//! carries a `success` flag and failures always carry a `message`.

use crate::game::{Hints, MoveResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A client request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    /// Ask for a new start word
    Start,
    /// Play a word
    Submit(SubmitRequest),
    /// Ask for hints
    Hint(HintRequest),
    /// Check a word's validity without playing it
    Check(CheckRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub current_word: String,
    #[serde(default)]
    pub new_word: String,
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub from_hint: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HintRequest {
    #[serde(default)]
    pub current_word: String,
    #[serde(default)]
    pub used_words: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub word: String,
}

/// A server response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Start(StartResponse),
    Move(MoveResponse),
    Hint(HintResponse),
    Check(CheckResponse),
    Failure(FailureResponse),
}

impl Response {
    /// Structured failure with a player-facing message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(FailureResponse {
            success: false,
            message: message.into(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartResponse {
    pub success: bool,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub modified_rule: bool,
    pub game_over: bool,
}

impl From<MoveResult> for MoveResponse {
    fn from(result: MoveResult) -> Self {
        Self {
            success: result.accepted,
            points: result.accepted.then_some(result.points),
            message: result.message,
            classification: result.kind.map(|kind| kind.name().to_string()),
            modified_rule: result.kind.is_some_and(|kind| kind.is_modified_rule()),
            game_over: result.game_over,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintResponse {
    pub success: bool,
    pub original_rule_hints: Vec<String>,
    pub modified_rule_hints: Vec<String>,
    pub game_over: bool,
}

impl From<Hints> for HintResponse {
    fn from(hints: Hints) -> Self {
        Self {
            success: true,
            original_rule_hints: hints.original,
            modified_rule_hints: hints.modified,
            game_over: hints.game_over,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    pub success: bool,
    pub word: String,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

/// Reasons a request cannot be handled
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid JSON data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Parse one request line
///
/// # Errors
///
/// Returns `ProtocolError::Malformed` if the line is not a valid request object.
pub fn parse_request(line: &str) -> Result<Request, ProtocolError> {
    Ok(serde_json::from_str(line)?)
}

/// Require a non-blank field, returning it lowercased
///
/// # Errors
///
/// Returns `ProtocolError::MissingField` naming the field if it is blank.
pub fn required(value: &str, field: &'static str) -> Result<String, ProtocolError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ProtocolError::MissingField(field))
    } else {
        Ok(value.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MoveKind;
    use serde_json::{Value, json};

    #[test]
    fn parses_start() {
        assert_eq!(parse_request(r#"{"action":"start"}"#).unwrap(), Request::Start);
    }

    #[test]
    fn parses_submit_with_defaults() {
        let request = parse_request(r#"{"action":"submit","current_word":"listen","new_word":"silent"}"#)
            .unwrap();
        assert_eq!(
            request,
            Request::Submit(SubmitRequest {
                current_word: "listen".to_string(),
                new_word: "silent".to_string(),
                used_words: vec![],
                from_hint: false,
            })
        );
    }

    #[test]
    fn parses_hint() {
        let request =
            parse_request(r#"{"action":"hint","current_word":"start","used_words":["tar"]}"#)
                .unwrap();
        let Request::Hint(hint) = request else {
            panic!("expected hint request");
        };
        assert_eq!(hint.used_words, vec!["tar"]);
    }

    #[test]
    fn rejects_unknown_action_and_garbage() {
        assert!(matches!(
            parse_request(r#"{"action":"resign"}"#),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(parse_request("not json").is_err());
        assert!(parse_request("{}").is_err());
    }

    #[test]
    fn required_field_messages() {
        assert_eq!(required(" Tar ", "Word").unwrap(), "tar");
        let err = required("  ", "Current word").unwrap_err();
        assert_eq!(err.to_string(), "Current word is required");
    }

    #[test]
    fn accepted_move_serializes_points_and_classification() {
        let response = Response::Move(MoveResponse::from(MoveResult {
            accepted: true,
            points: 25,
            kind: Some(MoveKind::SharedLetters),
            reason: None,
            game_over: false,
            message: "Valid word with modified rules!".to_string(),
        }));

        let value: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "points": 25,
                "message": "Valid word with modified rules!",
                "classification": "shared_letters",
                "modified_rule": true,
                "game_over": false,
            })
        );
    }

    #[test]
    fn rejected_move_omits_points() {
        let response = Response::Move(MoveResponse::from(MoveResult {
            accepted: false,
            points: 0,
            kind: None,
            reason: None,
            game_over: false,
            message: "Not a valid word".to_string(),
        }));

        let value: Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], json!(false));
        assert!(value.get("points").is_none());
        assert!(value.get("classification").is_none());
        assert!(value.get("modified_rule").is_none());
    }

    #[test]
    fn failure_shape() {
        let value = serde_json::to_value(Response::failure("Current word is required")).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "message": "Current word is required"})
        );
    }
}
