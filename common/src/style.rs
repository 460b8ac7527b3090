use crate::transaction::TransactionType;

/// Arrow icon shown at the start of a transaction row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    GreenArrow,
    RedArrow,
}

/// Colour of the secondary line of a transaction row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Success => "tone-success",
            Tone::Neutral => "tone-neutral",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeStyle {
    pub indicator: Indicator,
    pub secondary_tone: Tone,
}

/// Row styling keyed by transaction type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeStyleMap {
    pub deposit: TypeStyle,
    pub withdrawal: TypeStyle,
    pub other: TypeStyle,
}

impl Default for TypeStyleMap {
    fn default() -> Self {
        Self {
            deposit: TypeStyle {
                indicator: Indicator::GreenArrow,
                secondary_tone: Tone::Neutral,
            },
            // Withdrawals carry the green secondary line in the current design.
            withdrawal: TypeStyle {
                indicator: Indicator::RedArrow,
                secondary_tone: Tone::Success,
            },
            other: TypeStyle {
                indicator: Indicator::RedArrow,
                secondary_tone: Tone::Neutral,
            },
        }
    }
}

impl TypeStyleMap {
    pub fn for_type(&self, kind: &TransactionType) -> TypeStyle {
        match kind {
            TransactionType::Deposit => self.deposit,
            TransactionType::Withdrawal => self.withdrawal,
            TransactionType::Other(_) => self.other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let styles = TypeStyleMap::default();
        let deposit = styles.for_type(&TransactionType::Deposit);
        assert_eq!(deposit.indicator, Indicator::GreenArrow);
        assert_eq!(deposit.secondary_tone, Tone::Neutral);

        let withdrawal = styles.for_type(&TransactionType::Withdrawal);
        assert_eq!(withdrawal.indicator, Indicator::RedArrow);
        assert_eq!(withdrawal.secondary_tone, Tone::Success);

        let other = styles.for_type(&TransactionType::Other("refund".into()));
        assert_eq!(other.indicator, Indicator::RedArrow);
        assert_eq!(other.secondary_tone, Tone::Neutral);
    }

    #[test]
    fn test_mapping_is_overridable() {
        let styles = TypeStyleMap {
            withdrawal: TypeStyle {
                indicator: Indicator::RedArrow,
                secondary_tone: Tone::Neutral,
            },
            ..TypeStyleMap::default()
        };
        assert_eq!(
            styles.for_type(&TransactionType::Withdrawal).secondary_tone,
            Tone::Neutral
        );
    }
}
