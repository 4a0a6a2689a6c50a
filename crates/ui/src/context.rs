use std::sync::Arc;
use std::time::Duration;

use quiz_core::{Question, QuizSession};
use services::{QuizConfig, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn questions(&self) -> Vec<Question>;
    fn config(&self) -> QuizConfig;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    questions: Arc<[Question]>,
    timer_secs: u32,
    feedback_delay: Duration,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let config = app.config();
        Self {
            quiz_service: app.quiz_service(),
            questions: app.questions().into(),
            timer_secs: config.timer_secs,
            feedback_delay: config.feedback_delay,
        }
    }

    /// A freshly shuffled session over the loaded question bank.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        self.quiz_service.start_session(self.questions.to_vec())
    }

    #[must_use]
    pub fn timer_secs(&self) -> u32 {
        self.timer_secs
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
