mod question;

pub use question::{BOOLEAN_OPTIONS, Question, QuestionError};
