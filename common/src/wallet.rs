use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY;

/// Wallet summary returned by `GET /wallet`.
///
/// Each figure is optional on its own: a missing or `null` field leaves only
/// that balance card without an amount.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    pub balance: Option<f64>,
    pub ledger_balance: Option<f64>,
    pub total_payout: Option<f64>,
    pub total_revenue: Option<f64>,
    pub pending_payout: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Wallet {
    /// Currency the amounts are denominated in.
    pub fn currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }
}
