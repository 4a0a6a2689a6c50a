//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quiz_core::QuestionError;

/// Errors emitted by a `QuestionSource`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question source request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question source rejected the request: {0}")]
    Api(ApiResponseCode),
    #[error("question source returned a malformed body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Non-zero Open Trivia DB `response_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiResponseCode(pub u8);

impl ApiResponseCode {
    #[must_use]
    pub fn meaning(self) -> &'static str {
        match self.0 {
            1 => "not enough questions for the query",
            2 => "invalid parameter",
            3 => "session token not found",
            4 => "session token exhausted",
            5 => "rate limited",
            _ => "unknown response code",
        }
    }
}

impl fmt::Display for ApiResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.meaning(), self.0)
    }
}

/// Errors emitted while turning fetched records into questions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("record {index} is not a valid question: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: QuestionError,
    },
}

/// Errors emitted by `QuizService` while preparing a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizStartError {
    #[error("no questions available for the quiz")]
    NoQuestions,
    #[error(transparent)]
    Source(#[from] QuestionSourceError),
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}
