//! # Teller Core
//!
//! Core domain types for the teller client - Role, Session, Account,
//! Profile, TransactionIntent, and the validation rules that run before
//! any request reaches the ledger service.

pub mod account;
pub mod error;
pub mod intent;
pub mod profile;
pub mod role;
pub mod session;
pub mod validate;

pub use account::{Account, AccountType};
pub use error::{CoreError, CoreResult};
pub use intent::{TransactionIntent, TxnKind};
pub use profile::Profile;
pub use role::Role;
pub use session::Session;
pub use validate::{is_present, is_valid_account_number, is_valid_amount, is_valid_pin};
