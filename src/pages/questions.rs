use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::components::question_card::QuestionCard;
use crate::quiz::{QuizAction, QuizContext, QUESTIONS};

#[function_component(Questions)]
pub fn questions() -> Html {
    let navigator = use_navigator();
    let quiz = use_context::<QuizContext>();
    let Some(quiz) = quiz else {
        return html! {};
    };

    let status = quiz.status();
    let answered = quiz.answers.answered_count();

    let cards = QUESTIONS
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let on_answer = {
                let quiz = quiz.clone();
                let id = question.id;
                Callback::from(move |value: bool| {
                    quiz.dispatch(QuizAction::Answer { id, value });
                })
            };
            html! {
                <QuestionCard
                    key={question.id.to_string()}
                    number={index + 1}
                    {question}
                    answer={quiz.answers.get(question.id)}
                    {on_answer}
                />
            }
        })
        .collect::<Html>();

    let on_proceed = {
        let all_answered = status.all_answered;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if !all_answered {
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Results);
            }
        })
    };

    let verdict_block = match status.verdict() {
        Some(verdict) => html! {
            <div class={classes!("verdict-banner", verdict.css_class())}>
                <p class="verdict-line">
                    <span class="verdict-icon">{verdict.icon()}</span>
                    {" "}{verdict.banner()}
                </p>
                <p>
                    {"Take the next step: our "}
                    <strong>{"free, comprehensive audit"}</strong>
                    {" details your specific vulnerabilities and provides an actionable compliance roadmap."}
                </p>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="page questions-page">
            <section class="page-header">
                <h1>{"The 30-Second Compliance Check"}</h1>
                <p>{"Answer honestly to see your clinic's immediate risk profile regarding modern data security threats."}</p>
            </section>

            <p class="quiz-progress">
                {format!("{} of {} answered", answered, QUESTIONS.len())}
            </p>

            <div class="question-list">
                { cards }
            </div>

            <div class="cta-row">
                { verdict_block }
                <button
                    class="cta-button"
                    disabled={!status.all_answered}
                    onclick={on_proceed}
                >
                    {"Book Your Free Compliance Audit"}
                    <span class="cta-arrow">{"→"}</span>
                </button>
            </div>
        </div>
    }
}
