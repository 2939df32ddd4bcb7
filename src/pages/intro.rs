use yew::prelude::*;
use crate::Route;
use crate::components::cta::CtaLink;

#[function_component(Intro)]
pub fn intro() -> Html {
    html! {
        <div class="page intro-page">
            // Hero
            <section class="page-header">
                <h1 class="hero-title">
                    {"IS YOUR MEDICAL LICENSE "}<span class="exposed">{"EXPOSED"}</span>{"?"}
                </h1>
                <p>
                    {"The Uncontrolled Use of Public AI Risks Your Clinic’s Future and Your Professional License."}
                </p>
                <p class="hero-detail">
                    {"The silent threat of staff using public Large Language Models (LLMs) for patient notes or administrative tasks is now an unauthorized "}
                    <strong>{"cross-border data transfer"}</strong>
                    {", constituting a direct violation of two key federal mandates:"}
                </p>
            </section>

            // Stakes
            <section class="panel">
                <h2>{"The Stakes are Immediate:"}</h2>
                <div class="grid-3">
                    <div class="stake">
                        <span class="icon">{"📄"}</span>
                        <p class="stake-title">{"FEDERAL MANDATES"}</p>
                        <p><strong>{"Federal Decree-Law No. 45/2021 (PDPL):"}</strong>{" Governing confidentiality and cross-border security of all Personal Data."}</p>
                        <p><strong>{"Federal Law No. 2 of 2019:"}</strong>{" Explicitly safeguarding the confidentiality and security of Electronic Health Data."}</p>
                    </div>

                    <div class="stake">
                        <span class="icon danger">{"💼"}</span>
                        <p class="stake-title">{"FINANCIAL LIABILITY"}</p>
                        <p>{"Violations expose the clinic owner to administrative fines up to "}<strong>{"AED 1,000,000"}</strong>{"."}</p>
                        <p>{"The transition to "}<strong>{"full PDPL enforcement in 2025"}</strong>{" means the window for achieving auditable compliance is closing."}</p>
                    </div>

                    <div class="stake">
                        <span class="icon danger">{"👥"}</span>
                        <p class="stake-title">{"CAREER RISK"}</p>
                        <p>
                            {"The failure to implement necessary controls (Technical and Organizational Measures, or "}
                            <strong>{"TOMS"}</strong>
                            {") risks suspension or withdrawal of the Medical Director’s license."}
                        </p>
                    </div>
                </div>

                <p class="stakes-note">
                    <strong>{"A Contractual Ban Is Not Enough."}</strong>
                    {" Regulators require provable "}
                    <strong>{"Technical and Organizational Measures (TOMS)"}</strong>
                    {" to secure health data from digital leakage."}
                </p>
            </section>

            <CtaLink
                to={Route::Questions}
                label="Start Your 30-Second Risk Check"
                note="Answer 3 quick questions to instantly assess your clinic’s PDPL/AI exposure."
            />

            <style>
                {r#"
                .hero-title {
                    font-size: 4rem;
                    line-height: 1.1;
                }

                .hero-title .exposed {
                    color: #dc2626;
                }

                .hero-detail {
                    max-width: 48rem;
                    margin: 1rem auto 0;
                }

                .stake {
                    padding: 1rem;
                    border: 1px solid #f3f4f6;
                    border-radius: 0.75rem;
                    background: #f9fafb;
                    font-size: 0.875rem;
                }

                .stake-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1e3a8a;
                }

                .stakes-note {
                    margin-top: 2.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid #f3f4f6;
                    color: #6b7280;
                    font-style: italic;
                }
                "#}
            </style>
        </div>
    }
}
