use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::config;


#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Questions}>{"Take the 30-Second Check"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="page legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What This Site Collects"}</h2>
                <p>{"This website does not create accounts, set tracking cookies, or send your answers anywhere. The 30-Second Compliance Check runs entirely in your browser:"}</p>
                <ul>
                    <li>{"Your answers are held in memory only while the page is open"}</li>
                    <li>{"Reloading or closing the page discards them"}</li>
                    <li>{"No answers are stored on our servers"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Third-Party Services"}</h2>
                <p>{"When you choose to book an audit or start the audit intake, you leave this site for a third-party scheduling or survey provider. Their own privacy policies apply to anything you submit there."}</p>
            </section>

            <section>
                <h2>{"3. Contacting Us"}</h2>
                <p>{"If you email or call us, we use your contact details only to respond to your enquiry and to prepare your compliance audit. We do not sell or share them."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"Under Federal Decree-Law No. 45/2021 (PDPL) you may ask us to:"}</p>
                <ul>
                    <li>{"Access the personal data we hold about you"}</li>
                    <li>{"Correct inaccurate data"}</li>
                    <li>{"Delete your data once your enquiry is closed"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Contact Information"}</h2>
                <p>{"For privacy-related inquiries or to exercise your data rights, contact:"}</p>
                <p>
                    {"Email: "}
                    <a href={config::mailto_href("Privacy request")}>{config::CONTACT_EMAIL}</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="page legal-content terms-of-service">
            <h1>{format!("{} Terms of Service", config::SITE_NAME)}</h1>
            <p class="company-name">{"Provided by a DPO Solutions Partner"}</p>

            <section>
                <h2>{"1. Introduction"}</h2>
                <p>{"These Terms of Service (\"Terms\") govern your use of this website (\"Site\"). By accessing or using the Site, you agree to be bound by these Terms."}</p>
            </section>

            <section>
                <h2>{"2. No Legal Advice"}</h2>
                <p>{"The content of this Site, including the 30-Second Compliance Check and its results, is general information. It is not legal advice and does not replace a full compliance audit or advice from qualified counsel."}</p>
            </section>

            <section>
                <h2>{"3. The Compliance Check"}</h2>
                <ul>
                    <li>{"The check asks three yes/no questions and shows an indicative result based only on your answers."}</li>
                    <li>{"A \"Compliance Confirmed\" result does not certify compliance with PDPL, NDHC, ADHICS or any other regulation."}</li>
                    <li>{"Answers are not stored and cannot be recovered after you leave the page."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Third-Party Links"}</h2>
                <p>{"Booking and audit-intake links lead to services operated by third parties. We are not responsible for their availability or content."}</p>
            </section>

            <section>
                <h2>{"5. Intellectual Property"}</h2>
                <p>{format!("All content on the Site, including text, graphics and logos, is the property of {} or its content suppliers and is protected by intellectual property laws.", config::SITE_NAME)}</p>
            </section>

            <section>
                <h2>{"6. Limitation of Liability"}</h2>
                <p>{"The Site is provided \"as is\" without warranties of any kind. We are not liable for any damages arising from the use of, or inability to use, the Site."}</p>
            </section>

            <section>
                <h2>{"7. Governing Law"}</h2>
                <p>{"These Terms are governed by the laws of the United Arab Emirates."}</p>
            </section>

            <section>
                <h2>{"8. Contact Us"}</h2>
                <p>
                    {"For questions or concerns regarding these Terms, please contact us at "}
                    <a href={config::mailto_href("Terms of Service")}>{config::CONTACT_EMAIL}</a>
                </p>
            </section>
            <LegalLinks />
        </div>
    }
}
