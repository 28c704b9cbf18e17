//! # Wire Types
//!
//! Typed request and response bodies for every ledger operation, decoded
//! and validated at the gateway boundary. Response payload fields outside
//! the declared contract are ignored; a payload that does not match its
//! declared shape is a decode failure, never a partially-read value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_core::{Account, AccountType, CoreResult, Profile, Role, Session};

/// Discriminated outcome of one ledger call.
///
/// `Rejected` carries the server's `error` message verbatim when present;
/// callers substitute their own fallback when it is absent.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Accepted(T),
    Rejected { message: Option<String> },
}

impl<T> ApiResult<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ApiResult::Accepted(_))
    }

    /// The accepted payload, discarding a rejection.
    pub fn accepted(self) -> Option<T> {
        match self {
            ApiResult::Accepted(payload) => Some(payload),
            ApiResult::Rejected { .. } => None,
        }
    }

    /// The rejection message, if this call was rejected with one.
    pub fn rejected_message(&self) -> Option<&str> {
        match self {
            ApiResult::Accepted(_) => None,
            ApiResult::Rejected { message } => message.as_deref(),
        }
    }
}

// === Response payloads ===

/// Payload of the three login operations. The role arrives as a raw
/// string and is only turned into a domain `Role` by `into_session`,
/// which is where an unknown role becomes a contract violation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub session_id: String,
    pub role: String,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub account: Option<Account>,
}

impl LoginPayload {
    /// Build the domain session, rejecting unknown roles and malformed
    /// role shapes instead of defaulting.
    pub fn into_session(self) -> CoreResult<Session> {
        let role = Role::from_str(&self.role)?;
        let session = Session {
            session_id: self.session_id,
            role,
            profile: self.profile,
            account: self.account,
        };
        session.check_shape()?;
        Ok(session)
    }
}

/// Payload of `GET /accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountsPayload {
    pub accounts: Vec<Account>,
}

/// Payload of `GET /accounts/balance`.
#[derive(Debug, Clone, Deserialize)]
pub struct BalancePayload {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Payload of operations that acknowledge with an optional message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of operations that acknowledge with no fields of their own.
#[derive(Debug, Clone, Deserialize)]
pub struct Acked {}

/// Payload of `GET /accounts/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchAccountPayload {
    pub found: bool,
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Payload of `GET /profiles/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchProfilePayload {
    pub found: bool,
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// Payload of `GET /logs` - audit lines, newest last.
#[derive(Debug, Clone, Deserialize)]
pub struct LogsPayload {
    pub logs: Vec<String>,
}

// === Request bodies ===

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmCredentials {
    pub account_number: String,
    pub pin: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePinRequest {
    pub account_number: String,
    pub pin: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    pub account_number: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_number: String,
    pub pin: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub initial_balance: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Partial profile update; absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<String>,
}
