use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{ChoiceVm, QuestionVm, QuizIntent, QuizVm};

#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(|| QuizVm::new(ctx.new_session(), ctx.bank_origin()));
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let result = vm.write().apply(intent);
        error.set(result.err());
    });

    let page = vm.read().page();
    let can_grade = page.can_grade();

    rsx! {
        section { class: "quiz",
            h2 { "Quiz" }
            p { class: "quiz-origin", "{page.origin}" }
            BankUpload { on_intent: dispatch }

            div { class: "quiz-filters",
                FacetSelect {
                    id: "year-select",
                    caption: "Year",
                    choices: page.years.clone(),
                    on_pick: move |index| dispatch.call(QuizIntent::SelectYear(index)),
                }
                FacetSelect {
                    id: "category-select",
                    caption: "Category",
                    choices: page.categories.clone(),
                    on_pick: move |index| dispatch.call(QuizIntent::SelectCategory(index)),
                }
            }

            if let Some(message) = page.empty_message {
                p { class: "quiz-empty", "{message}" }
            }

            for question in page.questions.iter() {
                QuestionBlock {
                    key: "{question.id}",
                    question: question.clone(),
                    on_intent: dispatch,
                }
            }

            div { class: "quiz-actions",
                button {
                    id: "quiz-grade",
                    r#type: "button",
                    disabled: !can_grade,
                    onclick: move |_| dispatch.call(QuizIntent::Grade),
                    "Grade"
                }
                button {
                    id: "quiz-reset",
                    r#type: "button",
                    onclick: move |_| dispatch.call(QuizIntent::Reset),
                    "Start over"
                }
            }

            if let Some(label) = page.score_label.clone() {
                p { class: "quiz-score", "{label}" }
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}

#[component]
fn BankUpload(on_intent: Callback<QuizIntent>) -> Element {
    rsx! {
        label { r#for: "bank-upload",
            "Question file"
            input {
                id: "bank-upload",
                r#type: "file",
                accept: ".csv",
                onchange: move |evt: FormEvent| {
                    spawn(async move {
                        for file in evt.files() {
                            let label = file.name();
                            match file.read_bytes().await {
                                Ok(bytes) => on_intent.call(QuizIntent::LoadBank {
                                    label,
                                    data: bytes.to_vec(),
                                }),
                                Err(err) => {
                                    tracing::warn!(file = %label, error = %err, "could not read uploaded file");
                                }
                            }
                        }
                    });
                },
            }
        }
    }
}

#[component]
fn FacetSelect(
    id: &'static str,
    caption: &'static str,
    choices: Vec<ChoiceVm>,
    on_pick: EventHandler<usize>,
) -> Element {
    rsx! {
        label { r#for: id,
            "{caption}"
            select {
                id,
                onchange: move |evt: FormEvent| {
                    if let Ok(index) = evt.value().parse::<usize>() {
                        on_pick.call(index);
                    }
                },
                for choice in choices.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.selected,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionBlock(question: QuestionVm, on_intent: Callback<QuizIntent>) -> Element {
    let class = if question.highlighted {
        "question highlighted"
    } else {
        "question"
    };

    rsx! {
        div { class, id: "question-{question.id}",
            div { class: "question-heading", "{question.heading}" }
            div { class: "question-text", "{question.text}" }
            div { class: "question-options",
                for option in question.options.iter().cloned() {
                    label { key: "{option.input_id}", class: "option",
                        input {
                            id: "{option.input_id}",
                            r#type: question.input_type,
                            name: "{question.group_name}",
                            checked: option.selected,
                            onchange: move |_| on_intent.call(option.intent.clone()),
                        }
                        "{option.label}"
                    }
                }
            }
        }
    }
}
