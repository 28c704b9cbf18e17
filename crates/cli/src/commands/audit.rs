//! Audit log command for the employee desk.

use crate::commands::{gateway_for, require_capability, require_session};
use anyhow::Result;
use teller_flows::{fetch_logs, Capability};
use teller_store::SessionStore;

pub async fn show_logs(api_url: &str, store: &SessionStore) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ViewLogs)?;

    let gateway = gateway_for(api_url, &session);
    let logs = fetch_logs(&gateway)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    if logs.is_empty() {
        println!("No log entries.");
        return Ok(());
    }

    for line in &logs {
        println!("{}", line);
    }
    println!("   {} entries", logs.len());

    Ok(())
}
