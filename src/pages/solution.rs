use yew::prelude::*;
use crate::Route;
use crate::components::cta::CtaLink;

struct Pillar {
    icon: &'static str,
    title: &'static str,
    requirement: &'static str,
    gap: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "🔒",
        title: "1. Technical & Organisational Measures (TOMS)",
        requirement: "Active technical measures to secure data.",
        gap: "Documentation showing you have mechanisms (e.g., redaction tools, sandboxed environments) to physically stop PHI/PII leakage into public AI tools, proving due diligence.",
    },
    Pillar {
        icon: "🌐",
        title: "2. Controlled Data Residency & Sovereignty",
        requirement: "Explicit control over the storage location of health data.",
        gap: "Any use of public AI is an unauthorized cross-border data transfer because the data is processed on servers outside the UAE's jurisdiction, violating data sovereignty mandates.",
    },
    Pillar {
        icon: "📖",
        title: "3. Auditable Staff Competency",
        requirement: "Provable evidence that all staff understand the risks.",
        gap: "You must demonstrate not just that training occurred, but that competency was tracked and that staff understand the specific nuances of PDPL and NDHC on modern technology.",
    },
];

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <div class="page solution-page">
            <section class="page-header">
                <h1>{"Beyond the Ban: What UAE Regulators Truly Demand"}</h1>
                <p>
                    {"Understanding the "}<strong>{"Strict Liability"}</strong>
                    {" model: The question is not "}<em>{"if"}</em>
                    {" your staff breached the rules, but "}<em>{"what you did"}</em>
                    {" to prevent it."}
                </p>
            </section>

            <section class="panel">
                <h2 class="trap-title">{"The Regulatory Liability Trap"}</h2>
                <p>
                    {"Under Federal Law and NDHC (National Unified Health Data System), medical facilities are held to a standard of "}
                    <strong>{"Strict Liability"}</strong>
                    {". Your liability does not end by issuing a memo or a contractual ban on using public Large Language Models (LLMs)."}
                </p>
                <p class="trap-emphasis">
                    {"If a patient's data is transferred out of the country via an employee's LLM query, the regulator fines the "}
                    <strong>{"clinic owner and Medical Director"}</strong>
                    {", not the employee. The defense requires "}
                    <strong>{"provable, auditable controls"}</strong>
                    {"."}
                </p>

                <h2>{"The Three Non-Negotiable Pillars of Audit-Ready Compliance"}</h2>
                <div class="grid-3">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class="pillar">
                            <span class="icon">{pillar.icon}</span>
                            <p class="pillar-title">{pillar.title}</p>
                            <p><strong>{"Requirement: "}</strong>{pillar.requirement}</p>
                            <p><strong>{"The Gap: "}</strong>{pillar.gap}</p>
                        </div>
                    }) }
                </div>

                <h3 class="pillar-summary">{"We provide the necessary framework, tools, and documentation."}</h3>
                <CtaLink to={Route::Questions} label="Assess Your Gaps Now" />
            </section>

            <style>
                {r#"
                .trap-title {
                    color: #dc2626;
                }

                .trap-emphasis {
                    font-weight: 600;
                    color: #1e3a8a;
                }

                .pillar {
                    padding: 1.5rem;
                    border-left: 4px solid #2563eb;
                    border-radius: 0.5rem;
                    background: #f9fafb;
                    font-size: 0.875rem;
                }

                .pillar-title {
                    font-size: 1.25rem;
                    font-weight: 800;
                    color: #1e3a8a;
                }

                .pillar-summary {
                    text-align: center;
                    margin-top: 3rem;
                }
                "#}
            </style>
        </div>
    }
}
