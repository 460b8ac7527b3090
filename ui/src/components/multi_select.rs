use dioxus::prelude::*;

use revdash_common::filter::{selected_labels, toggle_value, SelectOption};

use super::icons::ChevronDown;

/// Dropdown of checkboxes; reports the whole selection on every toggle.
#[component]
pub fn MultiSelect(
    options: &'static [SelectOption],
    value: Vec<String>,
    #[props(into, default = "Select options".to_string())] placeholder: String,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let mut open = use_signal(|| false);
    let summary = selected_labels(options, &value, &placeholder);

    rsx! {
        div { class: "multi-select",
            button {
                class: "multi-select-trigger",
                onclick: move |_| open.set(!open()),
                span { "{summary}" }
                ChevronDown {}
            }
            if open() {
                div { class: "multi-select-menu",
                    for opt in options.iter() {
                        {
                            let checked = value.iter().any(|v| v == opt.value);
                            let current = value.clone();
                            rsx! {
                                label { class: "multi-select-item", key: "{opt.value}",
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: move |_| {
                                            let mut next = current.clone();
                                            toggle_value(&mut next, opt.value);
                                            on_change.call(next);
                                        },
                                    }
                                    span { "{opt.label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
