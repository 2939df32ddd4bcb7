use yew::prelude::*;
use crate::Route;
use crate::config;
use crate::components::cta::{CtaLink, ExternalCta};

#[function_component(Contact)]
pub fn contact() -> Html {
    let mailto = config::mailto_href("Compliance audit enquiry");
    let tel = config::phone_href();

    html! {
        <div class="page contact-page">
            <section class="page-header">
                <h1>{"Talk to a Compliance Specialist"}</h1>
                <p>{"Questions about PDPL, NDHC or your clinic's use of AI tools? Reach us directly or book a slot."}</p>
            </section>

            <div class="panel contact-grid">
                <div class="contact-item">
                    <span class="icon">{"✉"}</span>
                    <h2>{"Email"}</h2>
                    <a href={mailto}>{config::CONTACT_EMAIL}</a>
                </div>
                <div class="contact-item">
                    <span class="icon">{"☎"}</span>
                    <h2>{"Phone"}</h2>
                    <a href={tel}>{config::CONTACT_PHONE}</a>
                </div>
                <div class="contact-item">
                    <span class="icon">{"📅"}</span>
                    <h2>{"Free Audit Call"}</h2>
                    <ExternalCta href={config::BOOKING_URL} label="Book a Slot" secondary={true} />
                </div>
            </div>

            <CtaLink
                to={Route::Questions}
                label="Take the 30-Second Check First"
                note="Your answers help us prepare for the call."
            />

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                    text-align: center;
                }

                .contact-item a {
                    color: #1e3a8a;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
