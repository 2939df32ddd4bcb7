use yew::prelude::*;
use crate::quiz::Question;

#[derive(Properties, PartialEq)]
pub struct QuestionCardProps {
    pub number: usize,
    pub question: &'static Question,
    pub answer: Option<bool>,
    pub on_answer: Callback<bool>,
}

#[function_component(QuestionCard)]
pub fn question_card(props: &QuestionCardProps) -> Html {
    let question = props.question;

    let card_class = match props.answer {
        Some(true) => Some("answered-yes"),
        Some(false) => Some("answered-no"),
        None => None,
    };

    let on_yes = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_answer.emit(true);
        })
    };

    let on_no = {
        let on_answer = props.on_answer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_answer.emit(false);
        })
    };

    html! {
        <div class={classes!("question-card", card_class)}>
            {
                if let Some(category) = question.category {
                    html! { <p class="question-category">{category}</p> }
                } else {
                    html! {}
                }
            }
            <h3>
                <span class="question-number">{format!("{}.", props.number)}</span>
                {question.prompt}
            </h3>
            <p class="regulation-note">{question.regulation_note}</p>

            <div class="answer-buttons">
                <button
                    class={classes!("answer-button", "yes", (props.answer == Some(true)).then(|| "selected"))}
                    onclick={on_yes}
                >
                    {"Yes, We're Covered"}
                </button>
                <button
                    class={classes!("answer-button", "no", (props.answer == Some(false)).then(|| "selected"))}
                    onclick={on_no}
                >
                    {"No, We Are Exposed"}
                </button>
            </div>
        </div>
    }
}
