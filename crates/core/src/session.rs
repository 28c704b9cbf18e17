//! # Session Module
//!
//! An authenticated identity plus role, valid until logout or
//! invalidation. Sessions are immutable values: any change (for example a
//! refreshed account snapshot) produces a new `Session` that the shell
//! re-saves wholesale.

use crate::account::Account;
use crate::error::{CoreError, CoreResult};
use crate::profile::Profile;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Authenticated session. Serializes to the same JSON shape the login
/// endpoints return and the session store persists:
/// `{ sessionId, role, profile?, account? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque server-issued credential, sent as a bearer token
    pub session_id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

impl Session {
    pub fn employee(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            role: Role::Employee,
            profile: None,
            account: None,
        }
    }

    pub fn customer(session_id: impl Into<String>, profile: Profile) -> Self {
        Self {
            session_id: session_id.into(),
            role: Role::Customer,
            profile: Some(profile),
            account: None,
        }
    }

    pub fn terminal(session_id: impl Into<String>, account: Account) -> Self {
        Self {
            session_id: session_id.into(),
            role: Role::Atm,
            profile: None,
            account: Some(account),
        }
    }

    /// The bearer credential attached to every authenticated request.
    pub fn token(&self) -> &str {
        &self.session_id
    }

    /// Check the role-shape invariant: a terminal session carries exactly
    /// one account snapshot and never a profile.
    pub fn check_shape(&self) -> CoreResult<()> {
        if self.session_id.is_empty() {
            return Err(CoreError::MalformedSession("empty session id".to_string()));
        }
        if self.role == Role::Atm {
            if self.account.is_none() {
                return Err(CoreError::MalformedSession(
                    "terminal session without an account snapshot".to_string(),
                ));
            }
            if self.profile.is_some() {
                return Err(CoreError::MalformedSession(
                    "terminal session must not carry a profile".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Whether this session is bound to the given account number. Only
    /// terminal sessions are bound; other roles are scoped server-side.
    pub fn owns_account(&self, account_number: &str) -> bool {
        match (&self.role, &self.account) {
            (Role::Atm, Some(account)) => account.account_number.to_string() == account_number,
            _ => true,
        }
    }
}
