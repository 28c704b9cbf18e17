//! Profile commands for the employee desk: create, search, update.

use crate::commands::{gateway_for, require_capability, require_session};
use anyhow::{bail, Result};
use teller_flows::{search_profile, Capability, CreateProfileFlow, UpdateProfileFlow};
use teller_gateway::{CreateProfileRequest, UpdateProfileRequest};
use teller_store::SessionStore;

#[allow(clippy::too_many_arguments)]
pub async fn create(
    api_url: &str,
    store: &SessionStore,
    name: String,
    username: String,
    password: String,
    phone: String,
    address: String,
    email: String,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let request = CreateProfileRequest {
        name,
        username,
        password,
        phone,
        address,
        email,
    };

    let gateway = gateway_for(api_url, &session);
    let mut flow = CreateProfileFlow::new(gateway);
    let state = flow.submit(&request).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            println!("   Username:    {}", request.username);
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Failed to create profile")),
    }
}

pub async fn search(api_url: &str, store: &SessionStore, username: &str) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let gateway = gateway_for(api_url, &session);
    let payload = search_profile(&gateway, username)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    let found = payload.found;
    match payload.profile.filter(|_| found) {
        Some(profile) => {
            println!("   Profile:     {}", profile.username);
            println!("   Name:        {}", profile.name);
            println!("   Phone:       {}", profile.phone);
            println!("   Address:     {}", profile.address);
            println!("   Email:       {}", profile.email);
            println!("   Credit:      {}", profile.credit_score);
        }
        None => println!("No profile named {} on record.", username),
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    api_url: &str,
    store: &SessionStore,
    username: String,
    name: Option<String>,
    password: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    email: Option<String>,
    credit_score: Option<String>,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let request = UpdateProfileRequest {
        username,
        name,
        password,
        phone,
        address,
        email,
        credit_score,
    };

    let gateway = gateway_for(api_url, &session);
    let mut flow = UpdateProfileFlow::new(gateway);
    let state = flow.submit(&request).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Failed to update profile")),
    }
}
