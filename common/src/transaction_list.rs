use crate::api::FetchState;
use crate::currency::format_money;
use crate::date::format_date;
use crate::style::{Indicator, Tone, TypeStyleMap};
use crate::transaction::Transaction;

/// Placeholder rows shown while transactions load.
pub const LOADING_ROW_COUNT: usize = 3;
/// Icon, two text lines, amount and date.
pub const SKELETONS_PER_LOADING_ROW: usize = 5;

pub const EMPTY_HEADING: &str = "No matching transaction found for the selected filter";
pub const EMPTY_BODY: &str = "Change your filters to see more results, or add a new product.";
pub const CLEAR_FILTER_LABEL: &str = "Clear Filter";

/// One rendered transaction row.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub indicator: Indicator,
    pub primary: String,
    pub secondary: String,
    pub secondary_tone: Tone,
    pub amount_text: String,
    pub date_text: String,
}

impl TransactionRow {
    pub fn new(tx: &Transaction, styles: &TypeStyleMap) -> Self {
        let style = styles.for_type(&tx.kind);
        Self {
            indicator: style.indicator,
            primary: tx.primary_label(),
            secondary: tx.secondary_label(),
            secondary_tone: style.secondary_tone,
            amount_text: format_money(tx.currency(), tx.amount),
            date_text: format_date(&tx.date),
        }
    }
}

/// The three mutually exclusive states of the transaction list.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Populated(Vec<TransactionRow>),
}

impl ListView {
    /// `None` means the list has not been loaded yet.
    pub fn resolve(
        transactions: Option<&[Transaction]>,
        is_loading: bool,
        styles: &TypeStyleMap,
    ) -> Self {
        match transactions {
            _ if is_loading => ListView::Loading,
            None => ListView::Loading,
            Some([]) => ListView::Empty,
            Some(txs) => ListView::Populated(
                txs.iter().map(|tx| TransactionRow::new(tx, styles)).collect(),
            ),
        }
    }

    pub fn rows(&self) -> &[TransactionRow] {
        match self {
            ListView::Populated(rows) => rows,
            _ => &[],
        }
    }
}

/// List input for a fetch: `None` while loading. A failed fetch has nothing
/// to list, so it shows as an empty list.
pub fn loaded_transactions(state: &FetchState<Vec<Transaction>>) -> Option<&[Transaction]> {
    match state {
        FetchState::Loading => None,
        FetchState::Ready(txs) => Some(txs.as_slice()),
        FetchState::Failed(_) => Some(&[] as &[Transaction]),
    }
}

/// Heading above the list, e.g. "24 Transactions".
pub fn count_heading(count: usize) -> String {
    format!("{count} Transactions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::transaction::{TransactionMetadata, TransactionType};

    fn tx(kind: TransactionType, product: Option<&str>, name: Option<&str>, amount: f64, date: &str) -> Transaction {
        Transaction {
            amount,
            date: date.into(),
            kind,
            payment_reference: "ref".into(),
            status: "successful".into(),
            metadata: TransactionMetadata {
                name: name.map(Into::into),
                product_name: product.map(Into::into),
                ..TransactionMetadata::default()
            },
            currency: None,
        }
    }

    fn psychology() -> Transaction {
        tx(TransactionType::Deposit, Some("Psychology of Money"), Some("Roy Cash"), 600.0, "2022-04-03")
    }

    #[test]
    fn test_not_loaded_is_loading() {
        let styles = TypeStyleMap::default();
        assert_eq!(ListView::resolve(None, false, &styles), ListView::Loading);
        assert_eq!(ListView::resolve(Some(&[psychology()][..]), true, &styles), ListView::Loading);
    }

    #[test]
    fn test_empty_list_is_empty_not_loading() {
        let view = ListView::resolve(Some(&[][..]), false, &TypeStyleMap::default());
        assert_eq!(view, ListView::Empty);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_populated_row() {
        let view = ListView::resolve(Some(&[psychology()][..]), false, &TypeStyleMap::default());
        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].primary, "Psychology of Money");
        assert_eq!(rows[0].secondary, "Roy Cash");
        assert_eq!(rows[0].amount_text, "USD 600.00");
        assert_eq!(rows[0].date_text, "Apr 03, 2022");
        assert_eq!(rows[0].indicator, Indicator::GreenArrow);
        assert_eq!(rows[0].secondary_tone, Tone::Neutral);
    }

    #[test]
    fn test_withdrawal_row_styling() {
        let withdrawal = tx(TransactionType::Withdrawal, None, Some("Bank"), 120500.5, "2023-12-25");
        let view = ListView::resolve(Some(&[withdrawal][..]), false, &TypeStyleMap::default());
        let row = &view.rows()[0];
        assert_eq!(row.indicator, Indicator::RedArrow);
        assert_eq!(row.secondary_tone, Tone::Success);
        assert_eq!(row.amount_text, "USD 120,500.50");
        assert_eq!(row.date_text, "Dec 25, 2023");
    }

    #[test]
    fn test_missing_product_shows_type_twice() {
        let bare = tx(TransactionType::Deposit, None, None, 100.0, "2022-04-03");
        let view = ListView::resolve(Some(&[bare][..]), false, &TypeStyleMap::default());
        let row = &view.rows()[0];
        assert_eq!(row.primary, "Deposit");
        assert_eq!(row.secondary, "Deposit");
    }

    #[test]
    fn test_order_is_preserved() {
        let txs = vec![
            tx(TransactionType::Deposit, Some("B"), None, 1.0, "2022-04-05"),
            tx(TransactionType::Withdrawal, Some("A"), None, 2.0, "2022-04-01"),
            tx(TransactionType::Deposit, Some("C"), None, 3.0, "2022-04-03"),
        ];
        let view = ListView::resolve(Some(txs.as_slice()), false, &TypeStyleMap::default());
        let primaries: Vec<_> = view.rows().iter().map(|r| r.primary.as_str()).collect();
        assert_eq!(primaries, ["B", "A", "C"]);
    }

    #[test]
    fn test_record_currency_used() {
        let mut euro = psychology();
        euro.currency = Some("EUR".into());
        let row = TransactionRow::new(&euro, &TypeStyleMap::default());
        assert_eq!(row.amount_text, "EUR 600.00");
    }

    #[test]
    fn test_fetch_states_map_to_views() {
        let styles = TypeStyleMap::default();
        let resolve = |state: &FetchState<Vec<Transaction>>| {
            ListView::resolve(loaded_transactions(state), state.is_loading(), &styles)
        };
        assert_eq!(resolve(&FetchState::Loading), ListView::Loading);
        assert_eq!(resolve(&FetchState::Ready(vec![])), ListView::Empty);
        assert_eq!(
            resolve(&FetchState::Failed(ApiError::Network("down".into()))),
            ListView::Empty
        );
        assert_eq!(resolve(&FetchState::Ready(vec![psychology()])).rows().len(), 1);
    }

    #[test]
    fn test_count_heading() {
        assert_eq!(count_heading(0), "0 Transactions");
        assert_eq!(count_heading(24), "24 Transactions");
    }
}
