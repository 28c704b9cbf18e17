//! # Role Module
//!
//! Actor roles recognized by the ledger service. The role set is closed:
//! a string outside it is a client/server contract violation, never a
//! default. The self-service terminal role travels as `"atm"` on the wire.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by an authenticated session. Immutable for the lifetime
/// of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Bank employee - manages accounts and profiles
    Employee,
    /// Customer - operates their own linked accounts
    Customer,
    /// Self-service terminal - bound to a single account
    Atm,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Customer => "customer",
            Role::Atm => "atm",
        }
    }

    /// Parse a wire role string. Anything outside the closed set is an
    /// `UnknownRole` contract violation.
    pub fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "employee" => Ok(Role::Employee),
            "customer" => Ok(Role::Customer),
            "atm" => Ok(Role::Atm),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
