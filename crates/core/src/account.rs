//! # Account Module
//!
//! The client's ephemeral copy of a ledger account. The ledger owns the
//! record; every copy here is stale until explicitly refreshed, and is
//! only ever replaced wholesale by a fresh server snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account types offered by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Checking,
    Saving,
    LineOfCredit,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Saving => "saving",
            AccountType::LineOfCredit => "lineOfCredit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "checking" => Some(AccountType::Checking),
            "saving" => Some(AccountType::Saving),
            "lineOfCredit" => Some(AccountType::LineOfCredit),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a ledger account as returned by the service.
///
/// Balances travel as JSON numbers with 2-decimal precision; the PIN is
/// stored server-side and echoed in snapshots, never derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: u32,
    pub pin: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Account {
    /// Balance rounded to the ledger's 2-decimal display precision.
    pub fn display_balance(&self) -> Decimal {
        self.balance.round_dp(2)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account #{} ({}, balance {:.2})",
            self.account_number,
            self.account_type,
            self.display_balance()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn checking(number: u32, balance: Decimal) -> Account {
        Account {
            account_number: number,
            pin: "1234".to_string(),
            account_type: AccountType::Checking,
            balance,
        }
    }

    #[test]
    fn test_account_type_strings() {
        assert_eq!(AccountType::Checking.as_str(), "checking");
        assert_eq!(AccountType::LineOfCredit.as_str(), "lineOfCredit");
        assert_eq!(
            AccountType::from_str("saving"),
            Some(AccountType::Saving)
        );
        assert_eq!(AccountType::from_str("loc"), None);
    }

    #[test]
    fn test_account_wire_shape() {
        let json = r#"{"accountNumber":5000,"pin":"4321","type":"lineOfCredit","balance":100.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();

        assert_eq!(account.account_number, 5000);
        assert_eq!(account.pin, "4321");
        assert_eq!(account.account_type, AccountType::LineOfCredit);
        assert_eq!(account.balance, dec!(100));

        let back = serde_json::to_string(&account).unwrap();
        assert!(back.contains("\"accountNumber\":5000"));
        assert!(back.contains("\"type\":\"lineOfCredit\""));
    }

    #[test]
    fn test_display_balance_rounds_to_cents() {
        let account = checking(1001, dec!(75.006));
        assert_eq!(account.display_balance(), dec!(75.01));
        assert_eq!(checking(1001, dec!(75)).display_balance(), dec!(75.00));
    }

    #[test]
    fn test_account_display() {
        let account = checking(1001, dec!(100.5));
        assert_eq!(
            format!("{}", account),
            "Account #1001 (checking, balance 100.50)"
        );
    }
}
