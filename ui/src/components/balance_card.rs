use dioxus::prelude::*;

use revdash_common::balance::BalanceDisplay;
use revdash_common::currency::DEFAULT_CURRENCY;

use super::icons::InfoIcon;
use super::skeleton::Skeleton;

/// A labelled balance, or skeletons while the amount is not known.
#[component]
pub fn BalanceCard(
    #[props(into)] label: String,
    #[props(!optional)] amount: Option<f64>,
    #[props(into, default = DEFAULT_CURRENCY.to_string())] currency: String,
    #[props(default = true)] show_info: bool,
    #[props(default)] is_loading: bool,
) -> Element {
    let display = BalanceDisplay::resolve(&label, amount, &currency, show_info, is_loading);

    match display {
        BalanceDisplay::Placeholder { show_info } => rsx! {
            div { class: "balance-card",
                div { class: "balance-card-top",
                    Skeleton { class: "skeleton-label" }
                    if show_info {
                        Skeleton { class: "skeleton-dot" }
                    }
                }
                Skeleton { class: "skeleton-amount" }
            }
        },
        BalanceDisplay::Figure { label, amount_text, show_info } => rsx! {
            div { class: "balance-card",
                div { class: "balance-card-top",
                    div { class: "balance-label", "{label}" }
                    if show_info {
                        InfoIcon {}
                    }
                }
                div { class: "balance-amount", "{amount_text}" }
            }
        },
    }
}
