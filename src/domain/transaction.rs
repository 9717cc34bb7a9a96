use chrono::{DateTime, Utc};

use super::Cents;

/// The two kinds of movement an account records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Portuguese label used on printed statements.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Depósito",
            TransactionKind::Withdrawal => "Saque",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single movement on an account's ledger.
/// Transactions are immutable once recorded - they are appended to the
/// account's history and never removed or edited.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    /// Wall-clock time at registration
    pub registered_at: DateTime<Utc>,
}

impl Transaction {
    /// Record a new movement, stamped now.
    pub fn new(kind: TransactionKind, amount_cents: Cents) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            kind,
            amount_cents,
            registered_at: Utc::now(),
        }
    }
}
