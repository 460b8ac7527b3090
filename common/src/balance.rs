use crate::currency::format_money;

/// What a balance card shows for a given set of inputs.
#[derive(Clone, Debug, PartialEq)]
pub enum BalanceDisplay {
    /// Skeletons for the label and the amount, plus a round one for the info icon.
    Placeholder { show_info: bool },
    Figure {
        label: String,
        amount_text: String,
        show_info: bool,
    },
}

impl BalanceDisplay {
    /// Placeholder while loading or when there is no amount yet.
    pub fn resolve(
        label: &str,
        amount: Option<f64>,
        currency: &str,
        show_info: bool,
        is_loading: bool,
    ) -> Self {
        match amount {
            Some(amount) if !is_loading => BalanceDisplay::Figure {
                label: label.to_string(),
                amount_text: format_money(currency, amount),
                show_info,
            },
            _ => BalanceDisplay::Placeholder { show_info },
        }
    }

    pub fn skeleton_count(&self) -> usize {
        match self {
            BalanceDisplay::Placeholder { show_info: true } => 3,
            BalanceDisplay::Placeholder { show_info: false } => 2,
            BalanceDisplay::Figure { .. } => 0,
        }
    }

    pub fn amount_text(&self) -> Option<&str> {
        match self {
            BalanceDisplay::Figure { amount_text, .. } => Some(amount_text),
            BalanceDisplay::Placeholder { .. } => None,
        }
    }
}
