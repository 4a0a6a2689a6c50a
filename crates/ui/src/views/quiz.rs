use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::{BOOLEAN_OPTIONS, TimerEvent};

use crate::context::AppContext;
use crate::views::{QuizSummary, ViewError};
use crate::vm::{Feedback, QuizVm};

/// Wall-clock length of one countdown unit.
const TICK: Duration = Duration::from_secs(1);

/// Start the countdown for the current question, or log the final score.
fn load_question(mut vm: Signal<QuizVm>, feedback_delay: Duration) {
    let Some(token) = vm.write().begin_question() else {
        let score = vm.read().final_score();
        tracing::info!(%score, "quiz finished");
        return;
    };

    spawn(async move {
        loop {
            tokio::time::sleep(TICK).await;
            let event = vm.write().tick(token);
            match event {
                Some(TimerEvent::Tick { .. }) => {}
                Some(TimerEvent::Expired) => break,
                None => return,
            }
        }
        let round = vm.read().round();
        move_on_after_feedback(vm, round, feedback_delay);
    });
}

/// Keep the feedback on screen, then settle the slot and load the next question.
fn move_on_after_feedback(mut vm: Signal<QuizVm>, round: u64, feedback_delay: Duration) {
    spawn(async move {
        tokio::time::sleep(feedback_delay).await;
        let moved = vm.write().next_question(round);
        match moved {
            Ok(true) => load_question(vm, feedback_delay),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, "could not move to the next question"),
        }
    });
}

fn card_class(feedback: Option<Feedback>) -> &'static str {
    match feedback {
        Some(Feedback::Correct) => "quiz-card quiz-card--correct",
        Some(Feedback::Wrong | Feedback::TimedOut) => "quiz-card quiz-card--wrong",
        None => "quiz-card",
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let feedback_delay = ctx.feedback_delay();
    let vm = {
        let ctx = ctx.clone();
        use_signal(move || QuizVm::new(ctx.start_session(), ctx.timer_secs()))
    };
    let mut error = use_signal(|| None::<ViewError>);

    use_hook(move || {
        spawn(async move { load_question(vm, feedback_delay) });
    });

    let on_answer = use_callback(move |choice: String| {
        let mut vm = vm;
        let result = vm.write().answer(&choice);
        match result {
            Ok(Some(_)) => {
                error.set(None);
                let round = vm.read().round();
                move_on_after_feedback(vm, round, feedback_delay);
            }
            Ok(None) => {}
            Err(err) => error.set(Some(err.into())),
        }
    });

    let on_restart = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let mut vm = vm;
            vm.write().restart(ctx.start_session());
            error.set(None);
            load_question(vm, feedback_delay);
        })
    };

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let Key::Character(text) = evt.data.key() else {
            return;
        };
        match text.to_lowercase().as_str() {
            "t" => on_answer.call(BOOLEAN_OPTIONS[0].to_string()),
            "f" => on_answer.call(BOOLEAN_OPTIONS[1].to_string()),
            _ => {}
        }
    });

    let state = vm.read();
    let score_label = state.score_label();
    let timer_label = state.timer_label();
    let accepts_input = state.accepts_input();
    let class = card_class(state.feedback());
    let prompt = state.prompt_text().unwrap_or_default().to_string();
    let options = state.options();
    let finished = state.is_finished();
    let score = state.final_score();
    let summary = state.summary_message();
    drop(state);

    let buttons = options.into_iter().enumerate().map(|(idx, option)| {
        let button_class = if idx == 0 { "btn btn-true" } else { "btn btn-false" };
        let choice = option.clone();
        rsx! {
            button {
                key: "{option}",
                class: button_class,
                r#type: "button",
                disabled: !accepts_input,
                onclick: move |_| on_answer.call(choice.clone()),
                "{option}"
            }
        }
    });

    rsx! {
        div {
            id: "quiz-root",
            class: "quiz",
            tabindex: 0,
            onkeydown: move |evt| on_key.call(evt),
            header { class: "quiz-header",
                span { id: "quiz-timer", "{timer_label}" }
                span { id: "quiz-score", "{score_label}" }
            }
            if let Some(err) = error() {
                p { class: "quiz-error", "{err.message()}" }
            }
            if finished {
                QuizSummary {
                    score,
                    message: summary,
                    on_restart: move |()| on_restart.call(()),
                }
            } else {
                div { class: class,
                    p { "{prompt}" }
                }
                div { class: "quiz-actions",
                    {buttons}
                }
            }
        }
    }
}
