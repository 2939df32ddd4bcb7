use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use crate::Route;
use crate::config;
use crate::components::cta::{CtaLink, ExternalCta};
use crate::quiz::{QuizAction, QuizContext, Verdict};

#[function_component(Results)]
pub fn results() -> Html {
    let navigator = use_navigator();
    let quiz = use_context::<QuizContext>();
    let Some(quiz) = quiz else {
        return html! {};
    };

    let status = quiz.status();

    // Reached without finishing the check, e.g. by typing the URL.
    if !status.all_answered {
        return html! {
            <div class="page results-page">
                <div class="result-card">
                    <h2>{"Your check isn't finished yet"}</h2>
                    <p>{"Answer all three questions to see your clinic's risk profile."}</p>
                    <CtaLink to={Route::Questions} label="Continue the Check" />
                </div>
            </div>
        };
    }

    let verdict = Verdict::from_has_any_no(status.has_any_no);

    let on_reassess = {
        let quiz = quiz.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Re-assess requested, starting a new check");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Intro);
            }
            quiz.dispatch(QuizAction::Reset);
        })
    };

    html! {
        <div class="page results-page">
            <div class={classes!("result-card", verdict.css_class())}>
                <div class="result-icon">{verdict.icon()}</div>
                <h2>{verdict.title()}</h2>
                <p class="result-message">{verdict.message()}</p>

                <div class="result-actions">
                    <ExternalCta href={config::BOOKING_URL} label="Book Your Free Compliance Audit" />
                    <ExternalCta href={config::AUDIT_INTAKE_URL} label="Start the Audit Intake" secondary={true} />
                </div>
                <p class="cta-note">{"Takes 15 minutes • Find your blindspots"}</p>

                <button class="reassess-button" onclick={on_reassess}>
                    {"Re-assess"}
                </button>
            </div>

            <style>
                {r#"
                .result-message {
                    font-size: 1.125rem;
                    color: #374151;
                    margin-bottom: 2rem;
                }

                .reassess-button {
                    margin-top: 2rem;
                    background: none;
                    border: none;
                    color: #1e3a8a;
                    text-decoration: underline;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
