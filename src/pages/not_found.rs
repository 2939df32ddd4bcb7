use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use crate::{config, Route};

/// Page name for a path that is exactly one segment below `base`, e.g.
/// `"questions"` for `/questions/`. Deeper paths such as `/bogus/intro`
/// give `None`.
fn page_name<'a>(path: &'a str, base: Option<&str>) -> Option<&'a str> {
    let path = base
        .and_then(|base| path.strip_prefix(base.trim_end_matches('/')))
        .unwrap_or(path);
    let name = path.trim_matches('/');
    (!name.is_empty() && !name.contains('/')).then_some(name)
}

fn named_route(path: &str, base: Option<&str>) -> Option<Route> {
    page_name(path, base)
        .map(Route::from_name)
        .filter(|route| *route != Route::NotFound)
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    // Bare page names (/questions, /intro) still resolve to their page
    let named = location
        .as_ref()
        .and_then(|location| named_route(location.path(), config::base_path()));

    if let Some(route) = named {
        info!("Redirecting page name to {:?}", route);
        return html! { <Redirect<Route> to={route} /> };
    }

    if let Some(location) = &location {
        warn!("No page at {}", location.path());
    }

    html! {
        <div class="not-found">
            <h1>{"Page Not Found"}</h1>
            <p>{"The requested page does not exist or an error occurred."}</p>
            <Link<Route> to={Route::Intro} classes="cta-button">
                {"Go to Home"}
            </Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Option<&str> = Some("/my-super-fast-site");

    #[test]
    fn page_names_resolve_from_paths() {
        assert_eq!(named_route("/questions", None), Some(Route::Questions));
        assert_eq!(named_route("/questions/", None), Some(Route::Questions));
        assert_eq!(named_route("/my-super-fast-site/intro", BASE), Some(Route::Intro));
        assert_eq!(named_route("/my-super-fast-site/intro/", BASE), Some(Route::Intro));
    }

    #[test]
    fn nested_page_names_stay_not_found() {
        assert_eq!(page_name("/bogus/intro", None), None);
        assert_eq!(named_route("/bogus/intro", None), None);
        assert_eq!(named_route("/my-super-fast-site/bogus/intro", BASE), None);
        // without a base the prefix is just another segment
        assert_eq!(named_route("/my-super-fast-site/intro", None), None);
    }

    #[test]
    fn bogus_paths_stay_not_found() {
        assert_eq!(named_route("/bogus-page", None), None);
        assert_eq!(named_route("/404", None), None);
        assert_eq!(named_route("/", None), None);
        assert_eq!(named_route("", None), None);
        assert_eq!(named_route("/my-super-fast-site", BASE), None);
    }
}
