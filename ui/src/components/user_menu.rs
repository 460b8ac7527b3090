use dioxus::prelude::*;

use revdash_common::nav::USER_MENU_ITEMS;
use revdash_common::user::User;

/// Avatar button opening the account menu.
#[component]
pub fn UserMenu(#[props(!optional)] user: Option<User>) -> Element {
    let mut open = use_signal(|| false);

    let user = user.unwrap_or_default();
    let initials = user.initials();
    let full_name = user.full_name();

    rsx! {
        div { class: "user-menu",
            div {
                class: "user-menu-trigger",
                onclick: move |_| open.set(!open()),
                div { class: "avatar avatar-small", "{initials}" }
                span { class: "hamburger", "☰" }
            }
            if open() {
                div { class: "popover user-popover",
                    div { class: "user-popover-header",
                        div { class: "avatar avatar-large", "{initials}" }
                        div {
                            h3 { class: "user-name", "{full_name}" }
                            p { class: "user-email", "{user.email}" }
                        }
                    }
                    div { class: "user-popover-items",
                        for label in USER_MENU_ITEMS.iter() {
                            button {
                                key: "{label}",
                                class: "user-popover-item",
                                onclick: move |_| {
                                    tracing::debug!("User menu: {label}");
                                    open.set(false);
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
