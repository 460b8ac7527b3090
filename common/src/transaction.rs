use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY;
use crate::date::parse_transaction_date;

/// Direction of a transaction. The backend only sends `deposit` and `withdrawal`;
/// anything else is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Other(raw) => raw,
        }
    }

    /// Capitalized form used when a row has no better label.
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "deposit" => TransactionType::Deposit,
            "withdrawal" => TransactionType::Withdrawal,
            _ => TransactionType::Other(raw),
        }
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counterparty and product details attached to a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionMetadata {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub email: Option<String>,
    pub quantity: Option<u32>,
    pub country: Option<String>,
    pub product_name: Option<String>,
}

/// One entry of `GET /transactions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    /// Calendar date or timestamp, as sent by the backend.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub payment_reference: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub metadata: TransactionMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Transaction {
    /// Product name if present, otherwise the capitalized type.
    pub fn primary_label(&self) -> String {
        non_empty(&self.metadata.product_name)
            .map(str::to_string)
            .unwrap_or_else(|| self.kind.label())
    }

    /// Counterparty name if present, otherwise the capitalized type.
    pub fn secondary_label(&self) -> String {
        non_empty(&self.metadata.name)
            .map(str::to_string)
            .unwrap_or_else(|| self.kind.label())
    }

    pub fn currency(&self) -> &str {
        self.currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_transaction_date(&self.date)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Upper-case the first letter of every word.
pub fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
