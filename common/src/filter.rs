//! Client-side transaction filters driven by the filter sheet.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::transaction::Transaction;

/// A choice in a multi-select control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Withdrawal", value: "withdrawal" },
    SelectOption { label: "Deposit", value: "deposit" },
];

pub const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption { label: "Successful", value: "successful" },
    SelectOption { label: "Pending", value: "pending" },
    SelectOption { label: "Failed", value: "failed" },
];

/// Add `value` if absent, remove it if present.
pub fn toggle_value(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

/// Labels of the selected values in selection order, or `placeholder` when none.
pub fn selected_labels(options: &[SelectOption], selected: &[String], placeholder: &str) -> String {
    let labels: Vec<&str> = selected
        .iter()
        .filter_map(|v| options.iter().find(|o| o.value == v.as_str()).map(|o| o.label))
        .collect();
    if labels.is_empty() {
        placeholder.to_string()
    } else {
        labels.join(", ")
    }
}

/// Quick date ranges offered above the date pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePreset {
    Today,
    Last7Days,
    ThisMonth,
    Last3Months,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::Today,
        DatePreset::Last7Days,
        DatePreset::ThisMonth,
        DatePreset::Last3Months,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Last7Days => "Last 7 days",
            DatePreset::ThisMonth => "This month",
            DatePreset::Last3Months => "Last 3 months",
        }
    }

    /// Inclusive date range ending at `today`.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = match self {
            DatePreset::Today => today,
            DatePreset::Last7Days => today - Duration::days(6),
            DatePreset::ThisMonth => today.with_day(1).unwrap_or(today),
            DatePreset::Last3Months => today
                .checked_sub_months(Months::new(3))
                .unwrap_or(NaiveDate::MIN),
        };
        (from, today)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Wire values of the selected transaction types.
    pub types: Vec<String>,
    pub statuses: Vec<String>,
}

impl TransactionFilter {
    pub fn apply_preset(&mut self, preset: DatePreset, today: NaiveDate) {
        let (from, to) = preset.range(today);
        self.from = Some(from);
        self.to = Some(to);
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        if self.from.is_some() || self.to.is_some() {
            let Some(date) = tx.calendar_date() else {
                return false;
            };
            if self.from.is_some_and(|from| date < from) || self.to.is_some_and(|to| date > to) {
                return false;
            }
        }
        if !self.types.is_empty() && !self.types.iter().any(|t| t == tx.kind.as_str()) {
            return false;
        }
        if !self.statuses.is_empty()
            && !self
                .statuses
                .iter()
                .any(|s| s.eq_ignore_ascii_case(tx.status.trim()))
        {
            return false;
        }
        true
    }

    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }

    /// Number of filter groups in use (date range, types, statuses).
    pub fn active_count(&self) -> usize {
        [
            self.from.is_some() || self.to.is_some(),
            !self.types.is_empty(),
            !self.statuses.is_empty(),
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Filter sheet state: the filter applied to the list and the copy being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub applied: TransactionFilter,
    pub draft: TransactionFilter,
    pub is_open: bool,
}

impl FilterDraft {
    /// Opens the sheet with the draft reset to the applied filter.
    pub fn open(&mut self) {
        self.draft = self.applied.clone();
        self.is_open = true;
    }

    /// Closes the sheet. Unapplied edits are dropped on the next `open`.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Commits the draft and closes the sheet.
    pub fn apply(&mut self) {
        self.applied = self.draft.clone();
        self.is_open = false;
    }

    /// Resets both the applied filter and the draft.
    pub fn clear(&mut self) {
        self.applied.clear();
        self.draft.clear();
    }
}
