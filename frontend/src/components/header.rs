use gloo::events::EventListener;
use gloo::utils::document;
use shared::api::pages;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Calendar,
    Viewer,
    SpecialDates,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    pub project_id: Option<String>,
    pub active: ActivePage,
}

fn node_contains(node_ref: &NodeRef, target: Option<&Node>) -> bool {
    match (node_ref.get(), target) {
        (Some(node), Some(target)) => node.contains(Some(target)),
        _ => false,
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu_open.set(!*menu_open);
        })
    };

    // Close when clicking anywhere outside the menu
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with(*menu_open, move |open| {
            let listener = open.then(|| {
                EventListener::new(&document(), "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = node_contains(&nav_ref, target.as_ref())
                        || node_contains(&toggle_ref, target.as_ref());
                    if !inside {
                        menu_open.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let link = |page: ActivePage, href: String, label: &'static str| {
        let class = classes!("nav-link", (props.active == page).then_some("active"));
        html! { <a {class} {href}>{label}</a> }
    };

    let nav_links = match props.project_id.as_deref() {
        Some(id) => html! {
            <>
                {link(ActivePage::Calendar, format!("/admin/calendar/{}", id), "Calendar")}
                {link(ActivePage::SpecialDates, pages::special_dates(Some(id)), "Special Dates")}
                {link(ActivePage::Viewer, format!("/viewer/{}", id), "Viewer")}
            </>
        },
        None => link(ActivePage::SpecialDates, pages::special_dates(None), "Special Dates"),
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{props.title.clone()}</h1>
                <button
                    ref={toggle_ref}
                    class={classes!("mobile-menu-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={on_toggle}
                >
                    <span class="hamburger"></span>
                </button>
                <nav ref={nav_ref} class={classes!("main-nav", (*menu_open).then_some("active"))}>
                    {nav_links}
                </nav>
            </div>
        </header>
    }
}
