use dioxus::prelude::*;

use revdash_common::nav::{NavState, APP_ITEMS};

use super::icons::{AppsGlyph, ChevronDown};

/// "Apps" entry of the nav bar with its popover of app shortcuts.
#[component]
pub fn AppsMenu(nav: Signal<NavState>) -> Element {
    let mut nav = nav;
    let mut open = use_signal(|| false);

    let state = nav.read().clone();
    let display_text = state.apps_display_text();
    let trigger_class = if state.apps_active() {
        "nav-item nav-item-active"
    } else {
        "nav-item"
    };

    rsx! {
        li { class: "apps-menu",
            if state.expanded_apps() {
                div {
                    class: "apps-trigger-expanded",
                    onclick: move |_| {
                        nav.write().open_apps();
                        open.set(!open());
                    },
                    div { class: "apps-trigger-section",
                        AppsGlyph {}
                        span { "Apps" }
                    }
                    div { class: "apps-trigger-section",
                        span { "{display_text}" }
                        ChevronDown {}
                    }
                }
            } else {
                div {
                    class: "{trigger_class}",
                    onclick: move |_| {
                        nav.write().open_apps();
                        open.set(!open());
                    },
                    AppsGlyph {}
                    div { "Apps" }
                }
            }

            if open() {
                div { class: "popover apps-popover",
                    for item in APP_ITEMS.iter() {
                        div {
                            key: "{item.title}",
                            class: "apps-popover-item",
                            onclick: move |_| {
                                nav.write().select_app_item(item);
                                open.set(false);
                            },
                            div { class: "apps-popover-icon", AppsGlyph {} }
                            div {
                                p { class: "apps-popover-title", "{item.title}" }
                                p { class: "apps-popover-description", "{item.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
