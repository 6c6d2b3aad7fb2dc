use containers::{maybe, Optional};
use log::debug;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    pub balance: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount {0:?} is not a whole number")]
    NotANumber(String),
    #[error("amount must be positive")]
    Zero,
}

/// Absent when the account can't cover `amount`.
pub fn withdraw(amount: u64, account: Account) -> Optional<Account> {
    Optional::new(account.balance.checked_sub(amount).map(|balance| Account { balance }))
}

// stands in for a persistence side effect
pub fn update_ledger(account: Account) -> Account {
    debug!("ledger updated, balance now {}", account.balance);
    account
}

pub fn remaining_balance(account: Account) -> String {
    format!("Your balance is ${}", account.balance)
}

pub fn finish_transaction(account: Account) -> String {
    remaining_balance(update_ledger(account))
}

pub fn get_twenty(account: Account) -> String {
    maybe(
        "You're broke!".to_string(),
        finish_transaction,
        withdraw(20, account),
    )
}

pub fn parse_amount(raw: Optional<&str>) -> Result<Optional<u64>, LedgerError> {
    raw.try_map(|s| -> Result<u64, LedgerError> {
        let amount: u64 = s
            .trim()
            .parse()
            .map_err(|_| LedgerError::NotANumber(s.to_string()))?;
        if amount == 0 {
            return Err(LedgerError::Zero);
        }
        Ok(amount)
    })
}
