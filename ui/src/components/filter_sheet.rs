use chrono::Local;
use dioxus::prelude::*;

use revdash_common::date::{format_calendar_date, parse_transaction_date, to_input_value};
use revdash_common::filter::{DatePreset, STATUS_OPTIONS, TYPE_OPTIONS};

use super::dashboard_state::use_dashboard_state;
use super::multi_select::MultiSelect;

/// Side sheet for editing the transaction filter. Edits go to the draft until "Apply".
#[component]
pub fn FilterSheet() -> Element {
    let mut state = use_dashboard_state();

    let (open, draft) = {
        let s = state.read();
        (s.filters.is_open, s.filters.draft.clone())
    };
    if !open {
        return rsx! {};
    }

    let from_value = draft.from.map(to_input_value).unwrap_or_default();
    let to_value = draft.to.map(to_input_value).unwrap_or_default();
    let range_caption = match (draft.from, draft.to) {
        (Some(from), Some(to)) => format!("{} – {}", format_calendar_date(from), format_calendar_date(to)),
        (Some(from), None) => format!("From {}", format_calendar_date(from)),
        (None, Some(to)) => format!("Until {}", format_calendar_date(to)),
        (None, None) => "Select date".to_string(),
    };

    rsx! {
        div { class: "sheet-backdrop",
            onclick: move |_| state.write().filters.close(),
        }
        aside { class: "sheet",
            div { class: "sheet-header",
                h2 { class: "sheet-title", "Filter" }
                button {
                    class: "sheet-close",
                    onclick: move |_| state.write().filters.close(),
                    "×"
                }
            }

            div { class: "preset-row",
                for preset in DatePreset::ALL {
                    button {
                        key: "{preset.label()}",
                        class: "preset-badge",
                        onclick: move |_| {
                            let today = Local::now().date_naive();
                            state.write().filters.draft.apply_preset(preset, today);
                        },
                        "{preset.label()}"
                    }
                }
            }

            div { class: "sheet-field",
                div { class: "sheet-label", "Date Range" }
                div { class: "date-range",
                    input {
                        r#type: "date",
                        value: "{from_value}",
                        oninput: move |evt| state.write().filters.draft.from = parse_transaction_date(&evt.value()),
                    }
                    input {
                        r#type: "date",
                        value: "{to_value}",
                        oninput: move |evt| state.write().filters.draft.to = parse_transaction_date(&evt.value()),
                    }
                }
                p { class: "date-range-caption", "{range_caption}" }
            }

            div { class: "sheet-field",
                div { class: "sheet-label", "Transaction Type" }
                MultiSelect {
                    options: TYPE_OPTIONS,
                    value: draft.types.clone(),
                    placeholder: "Select transaction type",
                    on_change: move |types: Vec<String>| state.write().filters.draft.types = types,
                }
            }

            div { class: "sheet-field",
                div { class: "sheet-label", "Transaction Status" }
                MultiSelect {
                    options: STATUS_OPTIONS,
                    value: draft.statuses.clone(),
                    placeholder: "Select transaction status",
                    on_change: move |statuses: Vec<String>| state.write().filters.draft.statuses = statuses,
                }
            }

            div { class: "sheet-footer",
                button {
                    class: "pill-button pill-outline",
                    onclick: move |_| {
                        let mut s = state.write();
                        s.filters.clear();
                        s.filters.close();
                    },
                    "Clear"
                }
                button {
                    class: "pill-button pill-dark",
                    onclick: move |_| state.write().filters.apply(),
                    "Apply"
                }
            }
        }
    }
}
