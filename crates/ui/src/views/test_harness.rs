use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::Question;
use services::{QuizConfig, QuizService, StaticQuestionSource};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;

struct TestApp {
    quiz_service: Arc<QuizService>,
    questions: Vec<Question>,
    config: QuizConfig,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn config(&self) -> QuizConfig {
        self.config.clone()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_quiz_harness(questions: Vec<Question>, config: QuizConfig) -> ViewHarness {
    let quiz_service = Arc::new(
        QuizService::new(Arc::new(StaticQuestionSource::default())).with_seed(Some(1)),
    );
    let app = Arc::new(TestApp {
        quiz_service,
        questions,
        config,
    });
    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app });
    ViewHarness { dom }
}
