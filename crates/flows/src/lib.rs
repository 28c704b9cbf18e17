//! # Teller Flows
//!
//! Session and transaction orchestration for the teller client: the role
//! router, the attempt state machine driving every money-moving flow,
//! and the account list/selection state kept consistent across
//! refreshes.
//!
//! Each view owns its own flow instances; nothing here is shared between
//! concurrent flows. Orchestration is single-threaded cooperative with
//! gateway calls as the only suspension points.

pub mod accounts;
pub mod employee;
pub mod pin;
pub mod router;
pub mod state;
pub mod transaction;

pub use accounts::{fetch_balance, load_accounts, AccountListState};
pub use employee::{
    fetch_logs, search_account, search_profile, CreateAccountFlow, CreateProfileFlow,
    LinkAccountFlow, UpdateProfileFlow,
};
pub use pin::PinChangeFlow;
pub use router::{Capability, View};
pub use state::{AttemptState, Failure, FailureKind, Outcome, Receipt};
pub use transaction::TransactionOrchestrator;
