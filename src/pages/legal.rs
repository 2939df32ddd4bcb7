use yew::prelude::*;
use crate::Route;
use crate::components::cta::CtaLink;

#[function_component(Legal)]
pub fn legal() -> Html {
    html! {
        <div class="page legal-page">
            <section class="page-header">
                <h1 class="legal-title">{"UAE Health Data: The Non-Negotiable Laws"}</h1>
                <p>
                    {"A review of the federal decrees that place "}
                    <strong>{"Strict Liability"}</strong>
                    {" on clinic owners and medical directors."}
                </p>
            </section>

            <div class="panel">
                <div class="law">
                    <span class="icon danger">{"⚖"}</span>
                    <div>
                        <h2>{"Federal Decree-Law No. 45/2021 (PDPL)"}</h2>
                        <p>
                            {"The primary federal law governing Personal Data (PD) protection, transfer, and processing within the UAE. Unauthorized use of public AI by staff constitutes a "}
                            <strong>{"cross-border data transfer without consent"}</strong>
                            {" or approved mechanism, placing the organization in direct violation."}
                        </p>
                    </div>
                </div>

                <div class="law">
                    <span class="icon danger">{"⚡"}</span>
                    <div>
                        <h2>{"Federal Law No. 2 of 2019"}</h2>
                        <p>
                            {"Explicitly mandates the "}
                            <strong>{"confidentiality and security of Electronic Health Data (EHD)"}</strong>
                            {". This requires auditable technical controls to ensure patient records are not shared, even accidentally, with unauthorized third parties (like public LLMs)."}
                        </p>
                    </div>
                </div>

                <div class="penalty">
                    <h3>{"💼 The Penalty Threshold"}</h3>
                    <p class="penalty-amount">
                        {"Administrative fines under PDPL can reach "}<strong>{"AED 1,000,000"}</strong>{"."}
                    </p>
                    <p>
                        {"Beyond fines, compliance failure demonstrates gross negligence in data security, directly threatening the "}
                        <strong>{"suspension or withdrawal of the Medical Director’s operating license"}</strong>
                        {"."}
                    </p>
                </div>
            </div>

            <CtaLink to={Route::Questions} label="See Our Compliance Solution" />

            <style>
                {r#"
                .legal-title {
                    color: #dc2626 !important;
                }

                .law {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }

                .penalty {
                    padding: 1.5rem;
                    border-left: 4px solid #ef4444;
                    border-radius: 0.75rem;
                    background: #fef2f2;
                }

                .penalty h3 {
                    color: #b91c1c;
                }

                .penalty-amount {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                "#}
            </style>
        </div>
    }
}
