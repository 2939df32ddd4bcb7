use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CtaLinkProps {
    pub to: Route,
    pub label: AttrValue,
    #[prop_or_default]
    pub note: Option<AttrValue>,
}

/// Primary call-to-action linking to another page of the site.
#[function_component(CtaLink)]
pub fn cta_link(props: &CtaLinkProps) -> Html {
    html! {
        <div class="cta-row">
            <Link<Route> to={props.to.clone()} classes="cta-button">
                {props.label.clone()}
                <span class="cta-arrow">{"→"}</span>
            </Link<Route>>
            {
                if let Some(note) = &props.note {
                    html! { <p class="cta-note">{note.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalCtaProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub secondary: bool,
}

/// Outbound link styled like [`CtaLink`]; always opens in a new tab.
#[function_component(ExternalCta)]
pub fn external_cta(props: &ExternalCtaProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("cta-button", props.secondary.then(|| "secondary"))}
        >
            {props.label.clone()}
            <span class="cta-arrow">{"→"}</span>
        </a>
    }
}
