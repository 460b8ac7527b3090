use dioxus::prelude::*;

use revdash_common::nav::{NavLayout, NavSection, NavState};

use super::api_client::ApiClient;
use super::apps_menu::AppsMenu;
use super::icons::AppsGlyph;
use super::user_menu::UserMenu;
use super::viewport::use_viewport_width;

#[component]
pub fn NavBar() -> Element {
    let mut nav_state = use_signal(NavState::default);
    let width = use_viewport_width();
    let layout = NavLayout::for_width(width());

    // Dropped with the nav bar, which cancels an in-flight request.
    let user = use_resource(move || async move {
        let result = ApiClient::from_env().user().await;
        if let Err(ref e) = result {
            tracing::warn!("Failed to load user: {e}");
        }
        result.ok()
    });
    let user = user.read().as_ref().cloned().flatten();

    rsx! {
        section { class: "navbar",
            div { class: "navbar-inner",
                div { class: "brand", AppsGlyph {} span { "revdash" } }
                nav {
                    if layout.show_sections {
                        ul { class: "nav-items",
                            for section in NavSection::ALL {
                                li {
                                    key: "{section.label()}",
                                    class: if nav_state.read().is_section_active(section) { "nav-item nav-item-active" } else { "nav-item" },
                                    onclick: move |_| nav_state.write().select_section(section),
                                    div { "{section.label()}" }
                                }
                            }
                            if layout.show_apps {
                                AppsMenu { nav: nav_state }
                            }
                        }
                    }
                }
                div { class: "navbar-actions",
                    span { class: "navbar-icon", "🔔" }
                    span { class: "navbar-icon", "💬" }
                    UserMenu { user: user }
                }
            }
        }
    }
}
