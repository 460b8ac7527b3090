//! Inline SVG icons.

use dioxus::prelude::*;

use revdash_common::style::Indicator;

#[component]
pub fn GreenArrow() -> Element {
    rsx! {
        span { class: "arrow arrow-in", "data-testid": "green-arrow",
            svg { width: "20", height: "20", view_box: "0 0 20 20", fill: "none",
                path {
                    d: "M14 6L6 14M6 14H12M6 14V8",
                    stroke: "#075132",
                    stroke_width: "1.6",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}

#[component]
pub fn RedArrow() -> Element {
    rsx! {
        span { class: "arrow arrow-out", "data-testid": "red-arrow",
            svg { width: "20", height: "20", view_box: "0 0 20 20", fill: "none",
                path {
                    d: "M6 14L14 6M14 6H8M14 6V12",
                    stroke: "#961100",
                    stroke_width: "1.6",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}

#[component]
pub fn DirectionIcon(indicator: Indicator) -> Element {
    match indicator {
        Indicator::GreenArrow => rsx! { GreenArrow {} },
        Indicator::RedArrow => rsx! { RedArrow {} },
    }
}

#[component]
pub fn InfoIcon() -> Element {
    rsx! {
        svg { class: "info-icon", width: "16", height: "16", view_box: "0 0 16 16", fill: "none",
            circle { cx: "8", cy: "8", r: "7", stroke: "#888F95", stroke_width: "1.4" }
            path { d: "M8 7.2V11.2", stroke: "#888F95", stroke_width: "1.4", stroke_linecap: "round" }
            circle { cx: "8", cy: "4.9", r: "0.8", fill: "#888F95" }
        }
    }
}

#[component]
pub fn EmptyIllustration() -> Element {
    rsx! {
        div { class: "empty-illustration", "data-testid": "empty-icon",
            svg { width: "48", height: "48", view_box: "0 0 48 48", fill: "none",
                rect { x: "0", y: "0", width: "48", height: "48", rx: "16", fill: "#EFF1F6" }
                path {
                    d: "M17 16H31V32L28 30L24 32L20 30L17 32V16Z",
                    stroke: "#56616B",
                    stroke_width: "1.6",
                    stroke_linejoin: "round",
                }
            }
        }
    }
}

#[component]
pub fn ChevronDown() -> Element {
    rsx! {
        svg { class: "chevron", width: "14", height: "14", view_box: "0 0 14 14", fill: "none",
            path { d: "M3.5 5.25L7 8.75L10.5 5.25", stroke: "currentColor", stroke_width: "1.5", stroke_linecap: "round" }
        }
    }
}

#[component]
pub fn AppsGlyph() -> Element {
    rsx! {
        svg { class: "apps-glyph", width: "16", height: "16", view_box: "0 0 16 16", fill: "currentColor",
            rect { x: "1", y: "1", width: "6", height: "6", rx: "1.5" }
            rect { x: "9", y: "1", width: "6", height: "6", rx: "1.5" }
            rect { x: "1", y: "9", width: "6", height: "6", rx: "1.5" }
            rect { x: "9", y: "9", width: "6", height: "6", rx: "1.5" }
        }
    }
}
