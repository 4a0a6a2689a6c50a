#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod question_bank;
pub mod quiz_service;
pub mod source;
pub mod trivia_client;

pub use config::{QuestionType, QuizConfig};
pub use error::{ApiResponseCode, QuestionBankError, QuestionSourceError, QuizStartError};
pub use question_bank::build_question_bank;
pub use quiz_service::QuizService;
pub use source::{QuestionRecord, QuestionSource, StaticQuestionSource};
pub use trivia_client::TriviaClient;
