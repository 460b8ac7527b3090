use dioxus::prelude::*;

use super::dashboard::Dashboard;
use super::dashboard_state::DashboardState;
use super::navbar::NavBar;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(DashboardState::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    rsx! {
        main { class: "app",
            NavBar {}
            Outlet::<Route> {}
        }
    }
}

/// Route component: renders the dashboard.
#[component]
fn Home() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = segments.join("/");

    rsx! {
        main { class: "app not-found",
            h2 { "Nothing at /{path}" }
            button {
                class: "pill-button pill-dark",
                onclick: move |_| { nav.replace(Route::Home {}); },
                "Back to dashboard"
            }
        }
    }
}
