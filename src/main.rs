use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::{use_title, use_window_scroll};
use log::{info, Level};
use chrono::Datelike;
use stylist::yew::Global;

mod config;
mod quiz;
mod styles;
mod pages {
    pub mod intro;
    pub mod questions;
    pub mod results;
    pub mod solution;
    pub mod about;
    pub mod legal;
    pub mod contact;
    pub mod termsprivacy;
    pub mod not_found;
}
mod components {
    pub mod cta;
    pub mod question_card;
}

use pages::{
    intro::Intro,
    questions::Questions,
    results::Results,
    solution::Solution,
    about::About,
    legal::Legal,
    contact::Contact,
    termsprivacy::{TermsOfService, PrivacyPolicy},
    not_found::NotFound,
};

use quiz::{QuizContext, QuizState};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Intro,
    #[at("/check")]
    Questions,
    #[at("/solution")]
    Solution,
    #[at("/about")]
    About,
    #[at("/legal")]
    Legal,
    #[at("/contact")]
    Contact,
    #[at("/results")]
    Results,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resolves a page name such as `"questions"`. Anything outside the
    /// known pages resolves to [`Route::NotFound`].
    pub fn from_name(name: &str) -> Route {
        match name {
            "intro" => Route::Intro,
            "questions" => Route::Questions,
            "solution" => Route::Solution,
            "about" => Route::About,
            "legal" => Route::Legal,
            "contact" => Route::Contact,
            "results" => Route::Results,
            "privacy" => Route::Privacy,
            "terms" => Route::Terms,
            _ => Route::NotFound,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Intro => "intro",
            Route::Questions => "questions",
            Route::Solution => "solution",
            Route::About => "about",
            Route::Legal => "legal",
            Route::Contact => "contact",
            Route::Results => "results",
            Route::Privacy => "privacy",
            Route::Terms => "terms",
            Route::NotFound => "not-found",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Intro => "Is Your Medical License Exposed?",
            Route::Questions => "The 30-Second Compliance Check",
            Route::Solution => "Our Solution",
            Route::About => "About Us",
            Route::Legal => "Legal Mandate",
            Route::Contact => "Contact",
            Route::Results => "Your Compliance Result",
            Route::Privacy => "Privacy Policy",
            Route::Terms => "Terms of Service",
            Route::NotFound => "Page Not Found",
        }
    }
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Intro => {
            info!("Rendering Intro page");
            html! { <Intro /> }
        },
        Route::Questions => {
            info!("Rendering Questions page");
            html! { <Questions /> }
        },
        Route::Solution => {
            info!("Rendering Solution page");
            html! { <Solution /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Legal => {
            info!("Rendering Legal page");
            html! { <Legal /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Results => {
            info!("Rendering Results page");
            html! { <Results /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


/// Scrolls to the top and retitles the document whenever the route changes.
#[function_component(RouteEffects)]
fn route_effects() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    use_title(format!("{} | {}", route.title(), config::SITE_NAME));

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );

    html! {}
}


#[function_component(PageShell)]
fn page_shell() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    html! {
        <main class={classes!("page-main", format!("page-{}", route.name()))}>
            <Switch<Route> render={switch} />
        </main>
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let current = use_route::<Route>();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 8.0;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let nav_link = |route: Route, label: &'static str| {
        let active = current.as_ref() == Some(&route);
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route} classes={classes!("nav-link", active.then(|| "active"))}>
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Intro} classes="nav-logo">
                    <span class="nav-logo-icon">{"⛨"}</span>
                    {config::SITE_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { nav_link(Route::Solution, "Our Solution") }
                    { nav_link(Route::About, "About Us") }
                    { nav_link(Route::Legal, "Legal Mandate") }
                    { nav_link(Route::Contact, "Contact") }
                </div>
            </div>
        </nav>
    }
}


#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>
                <span>{format!("© {} {}, a DPO Solutions Partner.", year, config::SITE_NAME)}</span>
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Terms} classes="footer-link">{"Terms of Service"}</Link<Route>>
            </p>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    let quiz = use_reducer(QuizState::default);

    html! {
        <BrowserRouter basename={config::base_path().map(AttrValue::from)}>
            <ContextProvider<QuizContext> context={quiz}>
                <Global css={styles::global_style()} />
                <RouteEffects />
                <Nav />
                <PageShell />
                <Footer />
            </ContextProvider<QuizContext>>
        </BrowserRouter>
    }
}


fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    const PAGES: [&str; 9] = [
        "intro", "questions", "solution", "about", "legal",
        "contact", "results", "privacy", "terms",
    ];

    #[test]
    fn every_page_name_resolves_to_its_route() {
        for name in PAGES {
            let route = Route::from_name(name);
            assert_ne!(route, Route::NotFound, "{} should be a known page", name);
            assert_eq!(route.name(), name);
        }
    }

    #[test]
    fn unknown_page_falls_back_to_not_found() {
        assert_eq!(Route::from_name("bogus-page"), Route::NotFound);
        assert_eq!(Route::from_name(""), Route::NotFound);
        assert_eq!(Route::from_name("Intro"), Route::NotFound);
        assert_eq!(Route::from_name("not-found"), Route::NotFound);
        // recovers on the next valid name
        assert_eq!(Route::from_name("intro"), Route::Intro);
    }

    #[test]
    fn routes_have_distinct_paths() {
        let mut paths: Vec<String> = Route::routes().into_iter().map(String::from).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }
}


#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::quiz::{QuestionId, Verdict};
    use yew_router::history::{AnyHistory, MemoryHistory};

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        path: AttrValue,
        answers: Vec<(QuestionId, bool)>,
    }

    /// The page area of `App` under a fixed URL and a pre-filled quiz.
    #[function_component]
    fn Harness(props: &HarnessProps) -> Html {
        let answers = props.answers.clone();
        let quiz = use_reducer(move || {
            let mut state = QuizState::default();
            for (id, value) in answers {
                state.answers.record(id, value);
            }
            state
        });

        let history: AnyHistory = MemoryHistory::with_entries([props.path.to_string()]).into();

        html! {
            <Router {history}>
                <ContextProvider<QuizContext> context={quiz}>
                    <Switch<Route> render={switch} />
                </ContextProvider<QuizContext>>
            </Router>
        }
    }

    async fn render_at(path: &'static str, answers: &[(QuestionId, bool)]) -> String {
        let answers = answers.to_vec();
        yew::ServerRenderer::<Harness>::with_props(move || HarnessProps {
            path: path.into(),
            answers,
        })
        .render()
        .await
    }

    /// Opening tag of the questions page's proceed button.
    fn proceed_button(html: &str) -> &str {
        let label = html
            .find("Book Your Free Compliance Audit")
            .expect("proceed button label");
        let start = html[..label].rfind("<button").expect("proceed button tag");
        &html[start..label]
    }

    #[tokio::test]
    async fn proceed_is_disabled_until_third_answer() {
        let html = render_at("/check", &[(1, true), (2, true)]).await;
        assert!(html.contains("2 of 3 answered"), "{}", html);
        assert!(proceed_button(&html).contains("disabled"), "{}", html);
        assert!(!html.contains(Verdict::Compliant.banner()));

        let html = render_at("/check", &[(1, true), (2, true), (3, true)]).await;
        assert!(!proceed_button(&html).contains("disabled"), "{}", html);
    }

    #[tokio::test]
    async fn all_yes_shows_compliance_confirmed() {
        let html = render_at("/results", &[(1, true), (2, true), (3, true)]).await;
        assert!(html.contains(Verdict::Compliant.title()), "{}", html);
        assert!(!html.contains(Verdict::AtRisk.title()));
        assert!(html.contains(config::BOOKING_URL));
    }

    #[tokio::test]
    async fn one_no_shows_immediate_action() {
        let html = render_at("/results", &[(1, true), (2, false), (3, true)]).await;
        assert!(html.contains(Verdict::AtRisk.title()), "{}", html);
        assert!(!html.contains(Verdict::Compliant.title()));
    }

    #[tokio::test]
    async fn unfinished_check_shows_no_verdict() {
        let html = render_at("/results", &[(1, true), (2, false)]).await;
        assert!(html.contains("Your check isn"), "{}", html);
        assert!(html.contains("Continue the Check"));
        assert!(!html.contains(Verdict::AtRisk.title()));
        assert!(!html.contains(Verdict::Compliant.title()));
    }

    #[tokio::test]
    async fn bogus_page_renders_not_found_with_home_link() {
        let html = render_at("/bogus-page", &[]).await;
        assert!(html.contains("Page Not Found"), "{}", html);
        assert!(html.contains("Go to Home"));
        assert!(html.contains(r#"href="/""#), "{}", html);

        // a page name below another segment is not a page
        let html = render_at("/bogus/intro", &[]).await;
        assert!(html.contains("Page Not Found"), "{}", html);
    }

    #[tokio::test]
    async fn not_found_arm_renders_fallback() {
        let html = render_at("/404", &[]).await;
        assert!(html.contains("Page Not Found"), "{}", html);
        assert!(html.contains(r#"href="/""#));
    }
}
