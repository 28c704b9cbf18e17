//! # Transaction Intent
//!
//! A proposed deposit or withdrawal awaiting validation and submission.
//! Intents exist only for the duration of one orchestration attempt and
//! are never persisted.

use crate::error::{CoreError, CoreResult};
use crate::validate::{is_valid_account_number, is_valid_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a money-moving transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Deposit,
    Withdraw,
}

impl TxnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnKind::Deposit => "deposit",
            TxnKind::Withdraw => "withdraw",
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transient value object describing one proposed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionIntent {
    pub kind: TxnKind,
    pub account_number: String,
    pub amount: Decimal,
}

impl TransactionIntent {
    pub fn deposit(account_number: impl Into<String>, amount: Decimal) -> Self {
        Self {
            kind: TxnKind::Deposit,
            account_number: account_number.into(),
            amount,
        }
    }

    pub fn withdraw(account_number: impl Into<String>, amount: Decimal) -> Self {
        Self {
            kind: TxnKind::Withdraw,
            account_number: account_number.into(),
            amount,
        }
    }

    /// Run the validation rules. Must pass before the intent is allowed
    /// anywhere near the gateway.
    pub fn validate(&self) -> CoreResult<()> {
        if !is_valid_account_number(&self.account_number) {
            return Err(CoreError::InvalidAccountNumber);
        }
        if !is_valid_amount(self.amount) {
            return Err(CoreError::InvalidAmount);
        }
        Ok(())
    }
}

impl fmt::Display for TransactionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on #{}", self.kind, self.amount, self.account_number)
    }
}
