use dioxus::prelude::*;

use revdash_common::style::TypeStyleMap;
use revdash_common::transaction::Transaction;
use revdash_common::transaction_list::{
    ListView, TransactionRow, CLEAR_FILTER_LABEL, EMPTY_BODY, EMPTY_HEADING, LOADING_ROW_COUNT,
};

use super::icons::{DirectionIcon, EmptyIllustration};
use super::skeleton::Skeleton;

/// Transaction history: skeleton rows, the empty state, or one row per transaction.
///
/// `transactions` is `None` until the list has been fetched.
#[component]
pub fn TransactionList(
    #[props(!optional)] transactions: Option<Vec<Transaction>>,
    #[props(default)] is_loading: bool,
    #[props(default)] styles: TypeStyleMap,
    on_clear_filter: EventHandler<()>,
) -> Element {
    let view = ListView::resolve(transactions.as_deref(), is_loading, &styles);

    match view {
        ListView::Loading => rsx! {
            div { class: "tx-list tx-list-loading",
                for idx in 0..LOADING_ROW_COUNT {
                    div { class: "tx-row", key: "{idx}",
                        div { class: "tx-left",
                            Skeleton { class: "skeleton-icon" }
                            div { class: "tx-text",
                                Skeleton { class: "skeleton-line-wide" }
                                Skeleton { class: "skeleton-line" }
                            }
                        }
                        div { class: "tx-right",
                            Skeleton { class: "skeleton-line" }
                            Skeleton { class: "skeleton-line-short" }
                        }
                    }
                }
            }
        },
        ListView::Empty => rsx! {
            div { class: "tx-empty",
                div {
                    EmptyIllustration {}
                    div { class: "tx-empty-heading", "{EMPTY_HEADING}" }
                    div { class: "tx-empty-body", "{EMPTY_BODY}" }
                    button {
                        class: "pill-button pill-light",
                        onclick: move |_| on_clear_filter.call(()),
                        "{CLEAR_FILTER_LABEL}"
                    }
                }
            }
        },
        ListView::Populated(rows) => rsx! {
            div { class: "tx-list",
                for (idx, row) in rows.into_iter().enumerate() {
                    TransactionRowView { key: "{idx}", row: row }
                }
            }
        },
    }
}

#[component]
fn TransactionRowView(row: TransactionRow) -> Element {
    let tone = row.secondary_tone.class();
    rsx! {
        div { class: "tx-row",
            div { class: "tx-left",
                DirectionIcon { indicator: row.indicator }
                div { class: "tx-text",
                    div { class: "tx-primary", "{row.primary}" }
                    p { class: "tx-secondary {tone}", "{row.secondary}" }
                }
            }
            div { class: "tx-right",
                div { class: "tx-amount", "{row.amount_text}" }
                p { class: "tx-date", "{row.date_text}" }
            }
        }
    }
}
