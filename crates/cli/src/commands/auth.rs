//! Authentication commands: login and logout.
//!
//! Login is the single point where a session record is created and
//! persisted; logout is where it is destroyed. The record is replaced
//! wholesale on every login.

use crate::commands::gateway_for;
use crate::LoginAction;
use anyhow::{bail, Result};
use teller_core::{is_valid_account_number, is_valid_pin, CoreError, Role};
use teller_gateway::{ApiResult, HttpGateway, LedgerGateway};
use teller_store::SessionStore;

pub async fn login(api_url: &str, store: &SessionStore, action: LoginAction) -> Result<()> {
    let gateway = HttpGateway::new(api_url);

    let result = match &action {
        LoginAction::Employee { username, password } => {
            gateway.employee_login(username, password).await?
        }
        LoginAction::Customer { username, password } => {
            gateway.customer_login(username, password).await?
        }
        LoginAction::Atm {
            account_number,
            pin,
        } => {
            // Validation rules run before the credential leaves the client
            if !is_valid_account_number(account_number) {
                bail!("{}", CoreError::InvalidAccountNumber);
            }
            if !is_valid_pin(pin) {
                bail!("{}", CoreError::InvalidPin);
            }
            gateway.atm_login(account_number, pin).await?
        }
    };

    let payload = match result {
        ApiResult::Accepted(payload) => payload,
        ApiResult::Rejected { message } => {
            bail!("{}", message.unwrap_or_else(|| "Invalid credentials".to_string()))
        }
    };

    // An unrecognized role or malformed session shape aborts here -
    // contract violations are never routed to a default view.
    let session = payload.into_session()?;
    store.save(&session)?;

    println!("✅ Logged in ({})", session.role);
    match session.role {
        Role::Employee => {
            println!("   Employee desk: create-account, search, link, create-profile, logs");
        }
        Role::Customer => {
            if let Some(profile) = &session.profile {
                println!("   Welcome, {}", display_name(profile));
            }
            println!("   Customer desk: accounts, deposit, withdraw, update-pin");
        }
        Role::Atm => {
            if let Some(account) = &session.account {
                println!("   Account:     #{}", account.account_number);
                println!("   Balance:     ${:.2}", account.display_balance());
            }
        }
    }

    Ok(())
}

fn display_name(profile: &teller_core::Profile) -> &str {
    if profile.name.is_empty() {
        &profile.username
    } else {
        &profile.name
    }
}

pub async fn logout(api_url: &str, store: &SessionStore) -> Result<()> {
    if let Some(session) = store.load() {
        let gateway = gateway_for(api_url, &session);
        // Best effort: the local record is cleared even if the server is
        // unreachable.
        if let Err(err) = gateway.logout().await {
            tracing::warn!(%err, "server-side logout failed");
        }
    }

    store.clear()?;
    println!("✅ Logged out");
    Ok(())
}
