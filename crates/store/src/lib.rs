//! # Teller Store
//!
//! Client-side persistence for the authenticated session: one JSON record
//! under a single well-known path, replaced wholesale on every login and
//! removed wholesale on logout.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teller_store::SessionStore;
//!
//! let store = SessionStore::new("data/session.json");
//! store.save(&session)?;
//! let current = store.load(); // None if absent or unreadable
//! store.clear()?;
//! ```

pub mod error;
pub mod session;

pub use error::{StoreError, StoreResult};
pub use session::SessionStore;
