use dioxus::prelude::*;

/// Grey pulsing block standing in for content that has not loaded.
#[component]
pub fn Skeleton(#[props(into)] class: String) -> Element {
    rsx! {
        div { class: "skeleton {class}", "data-testid": "skeleton" }
    }
}
