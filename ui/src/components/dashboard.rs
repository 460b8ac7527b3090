use dioxus::prelude::*;

use revdash_common::api::{ApiError, FetchState};
use revdash_common::currency::DEFAULT_CURRENCY;
use revdash_common::transaction_list::{count_heading, loaded_transactions};

use super::api_client::ApiClient;
use super::balance_card::BalanceCard;
use super::dashboard_state::use_dashboard_state;
use super::filter_sheet::FilterSheet;
use super::icons::ChevronDown;
use super::transaction_list::TransactionList;

fn log_failure<T>(what: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(ref e) = result {
        tracing::warn!("Failed to load {what}: {e}");
    }
    result
}

/// Balances and transaction history. Owns both fetches and the filter state.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_dashboard_state();

    // Both requests belong to this page; navigating away drops and cancels them.
    let mut wallet_res = use_resource(|| async move {
        tracing::debug!("Fetching wallet");
        log_failure("wallet", ApiClient::from_env().wallet().await)
    });
    let mut transactions_res = use_resource(|| async move {
        tracing::debug!("Fetching transactions");
        log_failure("transactions", ApiClient::from_env().transactions().await)
    });

    let wallet = FetchState::from_result(wallet_res.read().as_ref().cloned());
    let transactions = FetchState::from_result(transactions_res.read().as_ref().cloned());

    let (filter, styles) = {
        let s = state.read();
        (s.filters.applied.clone(), s.styles)
    };
    let active_filters = filter.active_count();
    let filtered = transactions.clone().map(|txs| filter.apply(&txs));
    let heading = count_heading(filtered.ready().map(Vec::len).unwrap_or(0));
    let list_items = loaded_transactions(&filtered).map(<[_]>::to_vec);
    let list_loading = filtered.is_loading();

    let wallet_loading = wallet.is_loading();
    let summary = wallet.ready().cloned();
    let currency = summary
        .as_ref()
        .map(|w| w.currency().to_string())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let wallet_error = wallet.error().map(ToString::to_string);
    let transactions_error = transactions.error().map(ToString::to_string);

    rsx! {
        section { class: "overview",
            div { class: "overview-main",
                section { class: "overview-balance",
                    BalanceCard {
                        label: "Available Balance",
                        amount: summary.as_ref().and_then(|w| w.balance),
                        currency: currency.clone(),
                        show_info: false,
                        is_loading: wallet_loading,
                    }
                    button { class: "pill-button pill-dark", "Withdraw" }
                }
            }
            div { class: "overview-side",
                BalanceCard {
                    label: "Ledger Balance",
                    amount: summary.as_ref().and_then(|w| w.ledger_balance),
                    currency: currency.clone(),
                    is_loading: wallet_loading,
                }
                BalanceCard {
                    label: "Total Payout",
                    amount: summary.as_ref().and_then(|w| w.total_payout),
                    currency: currency.clone(),
                    is_loading: wallet_loading,
                }
                BalanceCard {
                    label: "Total Revenue",
                    amount: summary.as_ref().and_then(|w| w.total_revenue),
                    currency: currency.clone(),
                    is_loading: wallet_loading,
                }
                BalanceCard {
                    label: "Pending Payout",
                    amount: summary.as_ref().and_then(|w| w.pending_payout),
                    currency: currency.clone(),
                    is_loading: wallet_loading,
                }
            }
        }

        if let Some(err) = wallet_error {
            div { class: "fetch-notice",
                span { "Couldn't load balances: {err}" }
                button { onclick: move |_| wallet_res.restart(), "Retry" }
            }
        }
        if let Some(err) = transactions_error {
            div { class: "fetch-notice",
                span { "Couldn't load transactions: {err}" }
                button { onclick: move |_| transactions_res.restart(), "Retry" }
            }
        }

        section { class: "transactions",
            div { class: "transactions-header",
                div {
                    div { class: "transactions-count", "{heading}" }
                    div { class: "transactions-subtitle", "Your transactions for the last 7 days" }
                }
                div { class: "transactions-actions",
                    button {
                        class: "pill-button pill-light",
                        onclick: move |_| state.write().filters.open(),
                        "Filter"
                        if active_filters > 0 {
                            span { class: "filter-count", "{active_filters}" }
                        }
                        ChevronDown {}
                    }
                    button { class: "pill-button pill-light", "Export list" }
                }
            }
            hr {}
            TransactionList {
                transactions: list_items,
                is_loading: list_loading,
                styles: styles,
                on_clear_filter: move |_| state.write().filters.clear(),
            }
        }

        FilterSheet {}
    }
}
