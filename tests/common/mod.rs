// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use minibanco::application::BankService;
use minibanco::domain::Cents;

pub const TEST_CAP: Cents = 50_000;
pub const TEST_LIMIT: u32 = 3;

/// A bank with the default withdrawal guards (R$ 500.00 cap, 3 withdrawals)
pub fn test_service() -> BankService {
    BankService::new(TEST_CAP, TEST_LIMIT)
}

/// Helper to parse a `dd-mm-yyyy` birth date (the menu's input format)
pub fn birth_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%d-%m-%Y").unwrap()
}

/// Bank with a single registered client (no accounts yet)
pub fn service_with_client(cpf: &str, name: &str) -> BankService {
    let mut service = test_service();
    service
        .create_client(
            cpf.into(),
            name.into(),
            birth_date("20-05-1990"),
            "Rua das Flores, 10 - Centro - São Paulo/SP".into(),
        )
        .unwrap();
    service
}

/// Bank with a single client holding one empty account
pub fn service_with_account(cpf: &str, name: &str) -> BankService {
    let mut service = service_with_client(cpf, name);
    service.open_account(cpf).unwrap();
    service
}
