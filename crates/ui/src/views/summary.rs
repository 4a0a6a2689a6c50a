use dioxus::prelude::*;
use quiz_core::Score;

#[component]
pub fn QuizSummary(score: Score, message: String, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "quiz-summary",
            dl { class: "summary",
                dt { "Correct" }
                dd { "{score.correct}" }

                dt { "Total" }
                dd { "{score.total}" }
            }
            p { class: "quiz-card quiz-card--finished", "{message}" }
            button {
                id: "quiz-restart",
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Play again"
            }
        }
    }
}
