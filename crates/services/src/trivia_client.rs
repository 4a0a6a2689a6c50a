use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{QuestionType, QuizConfig};
use crate::error::{ApiResponseCode, QuestionSourceError};
use crate::source::{QuestionRecord, QuestionSource};

/// Open Trivia DB client.
#[derive(Clone)]
pub struct TriviaClient {
    client: Client,
    base_url: String,
    amount: u32,
    question_type: QuestionType,
}

impl TriviaClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, amount: u32, question_type: QuestionType) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            amount,
            question_type,
        }
    }

    #[must_use]
    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.base_url.clone(), config.amount, config.question_type)
    }

    #[must_use]
    pub fn request_url(&self) -> String {
        format!(
            "{}?amount={}&type={}",
            self.base_url.trim_end_matches('/'),
            self.amount,
            self.question_type.as_query()
        )
    }
}

#[async_trait]
impl QuestionSource for TriviaClient {
    /// Fetch one batch of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the request fails, the status is not
    /// a success, or the API reports a non-zero response code.
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
        let url = self.request_url();
        tracing::debug!(%url, "fetching trivia questions");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let records = parse_response(&body)?;
        tracing::info!(count = records.len(), "fetched trivia questions");
        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<QuestionRecord>,
}

/// Decode an Open Trivia DB response body.
///
/// # Errors
///
/// Returns `QuestionSourceError::Decode` for malformed JSON and
/// `QuestionSourceError::Api` for a non-zero `response_code`.
pub fn parse_response(body: &str) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
    let response: TriviaResponse = serde_json::from_str(body)?;
    if response.response_code != 0 {
        return Err(QuestionSourceError::Api(ApiResponseCode(
            response.response_code,
        )));
    }
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "boolean",
                "difficulty": "easy",
                "category": "Science: Computers",
                "question": "The logo for Snapchat is a Bell.",
                "correct_answer": "False",
                "incorrect_answers": ["True"]
            },
            {
                "type": "boolean",
                "difficulty": "medium",
                "category": "Entertainment: Film",
                "question": "&quot;Jaws&quot; was released in 1975.",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }
        ]
    }"#;

    #[test]
    fn parses_results() {
        let records = parse_response(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].correct_answer, "False");
        assert_eq!(records[0].category.as_deref(), Some("Science: Computers"));
        assert_eq!(records[1].question, "&quot;Jaws&quot; was released in 1975.");
        assert_eq!(records[1].incorrect_answers, ["False"]);
    }

    #[test]
    fn non_zero_response_code_is_an_error() {
        let err = parse_response(r#"{"response_code": 1, "results": []}"#).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Api(ApiResponseCode(1))));
        assert!(err.to_string().contains("not enough questions"));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, QuestionSourceError::Decode(_)));
    }

    #[test]
    fn request_url_carries_amount_and_type() {
        let client = TriviaClient::new("https://opentdb.com/api.php/", 10, QuestionType::Boolean);
        assert_eq!(
            client.request_url(),
            "https://opentdb.com/api.php?amount=10&type=boolean"
        );
    }
}
