use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::QuestionSourceError;

/// One question as delivered by a question source.
///
/// Text may still carry HTML entities; see `build_question_bank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(question: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            category: None,
            difficulty: None,
            incorrect_answers: Vec::new(),
        }
    }
}

/// Anything that can hand out a list of question records.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, QuestionSourceError>;
}

/// Fixed, in-memory question source for tests and offline play.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    records: Vec<QuestionRecord>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, QuestionSourceError> {
        Ok(self.records.clone())
    }
}
