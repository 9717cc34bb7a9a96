use chrono::NaiveDate;

use super::Account;

/// A bank client identified by CPF (the tax-id used as registry key).
/// Accounts are exclusively owned by their client; the registry derives
/// any global view by walking clients.
#[derive(Debug, Clone)]
pub struct Client {
    pub cpf: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<Account>,
}

impl Client {
    /// A new client starts with zero accounts.
    pub fn new(cpf: String, name: String, birth_date: NaiveDate, address: String) -> Self {
        Self {
            cpf,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// The account operations in the menu always target the client's
    /// first account.
    pub fn first_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub(crate) fn first_account_mut(&mut self) -> Option<&mut Account> {
        self.accounts.first_mut()
    }

    /// Case-insensitive substring match on the display name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}
