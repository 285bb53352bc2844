//! Request handling
//!
//! The server keeps no per-game state: every request carries the current word and
//! the used words. The validity cache inside the validator is the only shared
//! mutable state.

use super::protocol::{
    CheckRequest, CheckResponse, HintRequest, HintResponse, MoveResponse, ProtocolError, Request,
    Response, StartResponse, SubmitRequest, parse_request, required,
};
use crate::game::{GameHistory, HintSelector, MoveEvaluator, pick_start_word};
use crate::validity::{VerdictCache, WordOracle, WordValidator};
use crate::wordlists::WordList;
use log::{debug, error};
use std::panic::{self, AssertUnwindSafe};

/// Fallback line when a response cannot be encoded
const ENCODING_FAILURE: &str = r#"{"success":false,"message":"Server error"}"#;

/// Stateless game server over a shared dictionary and validity cache
pub struct GameServer<'a, O: WordOracle, C: VerdictCache> {
    words: &'a WordList,
    validator: WordValidator<'a, O, C>,
}

impl<'a, O: WordOracle, C: VerdictCache> GameServer<'a, O, C> {
    pub const fn new(words: &'a WordList, validator: WordValidator<'a, O, C>) -> Self {
        Self { words, validator }
    }

    #[inline]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }

    #[inline]
    pub const fn validator(&self) -> &WordValidator<'a, O, C> {
        &self.validator
    }

    /// Handle one raw request line and encode the response
    ///
    /// Never panics: parse errors, missing fields and panics inside handlers all
    /// become `success: false` responses.
    pub fn handle_line(&self, line: &str) -> String {
        let response = match parse_request(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                debug!("Bad request line: {e}");
                Response::failure(e.to_string())
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|e| {
            error!("Could not encode response: {e}");
            ENCODING_FAILURE.to_string()
        })
    }

    /// Dispatch a parsed request, converting any panic into a failure response
    pub fn handle(&self, request: Request) -> Response {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.dispatch(request)));

        match outcome {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => Response::failure(e.to_string()),
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!("Request handler failed: {reason}");
                Response::failure(format!("Server error: {reason}"))
            }
        }
    }

    fn dispatch(&self, request: Request) -> Result<Response, ProtocolError> {
        match request {
            Request::Start => Ok(self.start()),
            Request::Submit(submit) => self.submit(&submit),
            Request::Hint(hint) => self.hint(&hint),
            Request::Check(check) => self.check(&check),
        }
    }

    /// Pick a start word
    pub fn start(&self) -> Response {
        match pick_start_word(self.words, &mut rand::rng()) {
            Ok(word) => Response::Start(StartResponse {
                success: true,
                word: word.text().to_string(),
            }),
            Err(e) => {
                error!("Cannot start a game: {e}");
                Response::failure(e.to_string())
            }
        }
    }

    /// Evaluate a submitted word
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingField` if either word is blank.
    pub fn submit(&self, request: &SubmitRequest) -> Result<Response, ProtocolError> {
        let current = required(&request.current_word, "Current word")?;
        let new_word = required(&request.new_word, "New word")?;
        let used = GameHistory::from_words(&request.used_words);

        let result = MoveEvaluator::new(self.words, &self.validator).evaluate(
            &current,
            &new_word,
            &used,
            request.from_hint,
        );

        Ok(Response::Move(MoveResponse::from(result)))
    }

    /// Suggest next moves
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingField` if the current word is blank.
    pub fn hint(&self, request: &HintRequest) -> Result<Response, ProtocolError> {
        let current = required(&request.current_word, "Current word")?;
        let used = GameHistory::from_words(&request.used_words);

        let hints = HintSelector::new(self.words).hints(&current, &used);
        Ok(Response::Hint(HintResponse::from(hints)))
    }

    /// Report whether a word is valid, without scoring it
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::MissingField` if the word is blank.
    pub fn check(&self, request: &CheckRequest) -> Result<Response, ProtocolError> {
        let word = required(&request.word, "Word")?;
        let valid = self.validator.is_valid(&word);
        Ok(Response::Check(CheckResponse {
            success: true,
            word,
            valid,
        }))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected internal error".to_string())
}
