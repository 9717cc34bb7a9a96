use thiserror::Error;

use super::{Cents, Transaction, TransactionKind};

/// Sequential account number, assigned by the registry starting at 1.
pub type AccountNumber = u32;

/// Every account belongs to the single fixed branch.
pub const BRANCH: &str = "0001";

/// Default maximum amount for a single withdrawal (R$ 500.00).
pub const DEFAULT_WITHDRAWAL_CAP: Cents = 50_000;

/// Default number of withdrawals allowed over the account's lifetime.
pub const DEFAULT_WITHDRAWAL_LIMIT: u32 = 3;

/// Possible failures of account operations. The Display text is the
/// user-facing Portuguese message printed by the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Operação falhou! O valor informado é inválido.")]
    InvalidAmount,
    #[error("Operação falhou! Você não tem saldo suficiente.")]
    InsufficientFunds,
    #[error("Operação falhou! O valor do saque excede o limite.")]
    WithdrawalCapExceeded,
    #[error("Operação falhou! Número máximo de saques excedido.")]
    WithdrawalLimitReached,
}

/// A checking account: balance, movement history and withdrawal counters.
///
/// Balance and counters are private so the guards in [`Account::deposit`]
/// and [`Account::withdraw`] are the only way to change them. The balance
/// never goes negative and `withdrawals_made` never exceeds the limit.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    balance_cents: Cents,
    withdrawal_cap_cents: Cents,
    withdrawal_limit: u32,
    withdrawals_made: u32,
    history: Vec<Transaction>,
}

impl Account {
    /// Open an empty account with the given withdrawal guards.
    pub fn new(number: AccountNumber, withdrawal_cap_cents: Cents, withdrawal_limit: u32) -> Self {
        Self {
            number,
            balance_cents: 0,
            withdrawal_cap_cents,
            withdrawal_limit,
            withdrawals_made: 0,
            history: Vec::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn balance_cents(&self) -> Cents {
        self.balance_cents
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }

    /// The ordered movement history, oldest first.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add funds. Fails with `InvalidAmount` for non-positive amounts and
    /// for amounts the balance cannot hold; otherwise increases the
    /// balance and records a Deposit movement.
    pub fn deposit(&mut self, amount_cents: Cents) -> Result<(), AccountError> {
        if amount_cents <= 0 {
            return Err(AccountError::InvalidAmount);
        }
        self.balance_cents = self
            .balance_cents
            .checked_add(amount_cents)
            .ok_or(AccountError::InvalidAmount)?;
        self.history
            .push(Transaction::new(TransactionKind::Deposit, amount_cents));
        Ok(())
    }

    /// Remove funds. The guards are evaluated in a fixed order and the
    /// first failing one wins:
    /// 1. `InsufficientFunds` - amount exceeds the balance
    /// 2. `WithdrawalCapExceeded` - amount exceeds the per-withdrawal cap
    /// 3. `WithdrawalLimitReached` - no withdrawals left on this account
    /// 4. `InvalidAmount` - non-positive amount
    ///
    /// On failure nothing changes; on success the balance decreases, a
    /// Withdrawal movement is recorded and the counter increments.
    pub fn withdraw(&mut self, amount_cents: Cents) -> Result<(), AccountError> {
        if amount_cents > self.balance_cents {
            return Err(AccountError::InsufficientFunds);
        }
        if amount_cents > self.withdrawal_cap_cents {
            return Err(AccountError::WithdrawalCapExceeded);
        }
        if self.withdrawals_made >= self.withdrawal_limit {
            return Err(AccountError::WithdrawalLimitReached);
        }
        if amount_cents <= 0 {
            return Err(AccountError::InvalidAmount);
        }

        self.balance_cents -= amount_cents;
        self.withdrawals_made += 1;
        self.history
            .push(Transaction::new(TransactionKind::Withdrawal, amount_cents));
        Ok(())
    }

    /// Snapshot of the movement history plus the current balance, for
    /// display. An empty history is a valid statement, not an error.
    pub fn statement(&self) -> Statement {
        Statement {
            entries: self.history.clone(),
            balance_cents: self.balance_cents,
        }
    }
}

/// Printable view of an account: past movements and current balance.
#[derive(Debug, Clone)]
pub struct Statement {
    pub entries: Vec<Transaction>,
    pub balance_cents: Cents,
}

impl Statement {
    pub fn has_movements(&self) -> bool {
        !self.entries.is_empty()
    }
}
