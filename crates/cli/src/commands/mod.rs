//! Command handlers. Each handler is one view mount: it reads the
//! persisted session at most once, routes by role, and owns the flow
//! instances it drives.

pub mod account;
pub mod audit;
pub mod auth;
pub mod profile;

use anyhow::{anyhow, bail, Result};
use teller_core::Session;
use teller_flows::{Capability, View};
use teller_gateway::HttpGateway;
use teller_store::SessionStore;

/// Load the persisted session or fail with a login hint.
pub(crate) fn require_session(store: &SessionStore) -> Result<Session> {
    store
        .load()
        .ok_or_else(|| anyhow!("Not logged in. Run `teller login` first."))
}

/// Route the session to its view and refuse operations outside its
/// capability set.
pub(crate) fn require_capability(session: &Session, capability: Capability) -> Result<View> {
    let view = View::for_role(session.role);
    if !view.permits(capability) {
        bail!("This operation is not available to the {} role", session.role);
    }
    Ok(view)
}

/// Gateway client carrying this session's bearer credential.
pub(crate) fn gateway_for(api_url: &str, session: &Session) -> HttpGateway {
    HttpGateway::with_token(api_url, session.token())
}
