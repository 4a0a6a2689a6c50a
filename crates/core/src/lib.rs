#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod timer;

pub use error::QuizError;
pub use model::{BOOLEAN_OPTIONS, Question, QuestionError};
pub use session::{QuizProgress, QuizSession, Score, SlotState};
pub use timer::{CountdownToken, DEFAULT_DURATION_UNITS, TimerController, TimerEvent};
