use yew::prelude::*;
use crate::Route;
use crate::config;
use crate::components::cta::CtaLink;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <section class="page-header">
                <h1>{"A Mission Built on Regulatory Defense"}</h1>
                <p>{"We translate complex UAE data laws into simple, auditable technology solutions for healthcare leaders."}</p>
            </section>

            <div class="panel">
                <section>
                    <h2><span class="icon">{"💡"}</span>{" Our Expertise"}</h2>
                    <p>
                        {format!("{} was founded by data privacy experts and former healthcare compliance officers who recognized a critical gap: traditional IT security doesn't address the ", config::SITE_NAME)}
                        <strong>{"Strict Liability"}</strong>
                        {" risks posed by modern AI and LLMs. Our focus is laser-targeted on the unique regulatory environment of the UAE."}
                    </p>
                </section>

                <section>
                    <h2><span class="icon">{"⛨"}</span>{" What We Provide"}</h2>
                    <ul>
                        <li><strong>{"Auditable TOMS (Technical & Organisational Measures):"}</strong>{" We deliver the provable technical controls required by law to prevent data leakage."}</li>
                        <li><strong>{"AI Governance Frameworks:"}</strong>{" Custom policies and training modules tailored for NDHC and PDPL compliance."}</li>
                        <li><strong>{"Risk Assessment and Auditing:"}</strong>{" A definitive audit trail that stands up to regulatory scrutiny, protecting your professional license."}</li>
                    </ul>
                </section>

                <blockquote class="about-quote">
                    <p>{"\"Compliance is not a document you file. It's a technical mechanism you must prove.\""}</p>
                    <footer>{format!("— The {} Compliance Team", config::SITE_NAME)}</footer>
                </blockquote>

                <CtaLink to={Route::Questions} label="Start Your Risk Assessment" />
            </div>

            <style>
                {r#"
                .about-quote {
                    margin: 2.5rem 0 0;
                    padding: 1.5rem;
                    border: 1px solid #bfdbfe;
                    border-radius: 0.75rem;
                    background: #eff6ff;
                    font-style: italic;
                }

                .about-quote footer {
                    font-size: 0.875rem;
                    color: #1e40af;
                }
                "#}
            </style>
        </div>
    }
}
