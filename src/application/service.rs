use chrono::NaiveDate;

use crate::domain::{Account, AccountNumber, BRANCH, Cents, Client, Statement};

use super::AppError;

/// High-level operations over the in-memory bank: the client registry and
/// the account ledgers it owns. This is the single interface the menu
/// loop (or any other front end) talks to; it replaces the module-level
/// client/account lists of the original exercise with an explicit value
/// threaded through the loop.
pub struct BankService {
    clients: Vec<Client>,
    next_account_number: AccountNumber,
    withdrawal_cap_cents: Cents,
    withdrawal_limit: u32,
}

/// One row of the account listing: branch, number and holder name.
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: String,
}

impl BankService {
    /// Create an empty bank. Every account opened through this service
    /// gets the given per-withdrawal cap and lifetime withdrawal limit.
    pub fn new(withdrawal_cap_cents: Cents, withdrawal_limit: u32) -> Self {
        Self {
            clients: Vec::new(),
            next_account_number: 1,
            withdrawal_cap_cents,
            withdrawal_limit,
        }
    }

    // ========================
    // Client operations
    // ========================

    /// Register a new client. The duplicate check on CPF is
    /// case-insensitive; lookups are exact-match.
    pub fn create_client(
        &mut self,
        cpf: String,
        name: String,
        birth_date: NaiveDate,
        address: String,
    ) -> Result<(), AppError> {
        if self
            .clients
            .iter()
            .any(|client| client.cpf.eq_ignore_ascii_case(&cpf))
        {
            return Err(AppError::DuplicateClient);
        }

        self.clients
            .push(Client::new(cpf, name, birth_date, address));
        Ok(())
    }

    /// Exact-match lookup by CPF.
    pub fn find_client(&self, cpf: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.cpf == cpf)
    }

    fn find_client_mut(&mut self, cpf: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|client| client.cpf == cpf)
    }

    /// Clients whose name contains the pattern, case-insensitively, in
    /// registration order.
    pub fn filter_clients(&self, pattern: &str) -> Vec<&Client> {
        self.clients
            .iter()
            .filter(|client| client.name_contains(pattern))
            .collect()
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    // ========================
    // Account operations
    // ========================

    /// Open a new account for an existing client. Account numbers are
    /// assigned sequentially across the whole bank, starting at 1.
    pub fn open_account(&mut self, cpf: &str) -> Result<AccountSummary, AppError> {
        let number = self.next_account_number;
        let cap = self.withdrawal_cap_cents;
        let limit = self.withdrawal_limit;

        let client = self.find_client_mut(cpf).ok_or(AppError::ClientNotFound)?;
        client.add_account(Account::new(number, cap, limit));

        let summary = AccountSummary {
            branch: BRANCH.to_string(),
            number,
            holder: client.name.clone(),
        };
        self.next_account_number += 1;
        Ok(summary)
    }

    /// Deposit into the client's first account. Returns the new balance.
    pub fn deposit(&mut self, cpf: &str, amount_cents: Cents) -> Result<Cents, AppError> {
        let client = self.find_client_mut(cpf).ok_or(AppError::ClientNotFound)?;
        let account = client.first_account_mut().ok_or(AppError::NoAccounts)?;
        account.deposit(amount_cents)?;
        Ok(account.balance_cents())
    }

    /// Withdraw from the client's first account. Returns the new balance.
    pub fn withdraw(&mut self, cpf: &str, amount_cents: Cents) -> Result<Cents, AppError> {
        let client = self.find_client_mut(cpf).ok_or(AppError::ClientNotFound)?;
        let account = client.first_account_mut().ok_or(AppError::NoAccounts)?;
        account.withdraw(amount_cents)?;
        Ok(account.balance_cents())
    }

    /// Statement of the client's first account.
    pub fn statement(&self, cpf: &str) -> Result<Statement, AppError> {
        let client = self.find_client(cpf).ok_or(AppError::ClientNotFound)?;
        let account = client.first_account().ok_or(AppError::NoAccounts)?;
        Ok(account.statement())
    }

    /// Every account in the bank, ordered by account number (which is
    /// creation order, since numbers are sequential).
    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        let mut rows: Vec<AccountSummary> = self
            .clients
            .iter()
            .flat_map(|client| {
                client.accounts().iter().map(|account| AccountSummary {
                    branch: BRANCH.to_string(),
                    number: account.number(),
                    holder: client.name.clone(),
                })
            })
            .collect();
        rows.sort_by_key(|row| row.number);
        rows
    }
}
