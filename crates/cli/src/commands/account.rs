//! Account commands: list, deposit/withdraw, PIN change, and the
//! employee desk operations (create, search, link).

use crate::commands::{gateway_for, require_capability, require_session};
use crate::AccountTypeArg;
use anyhow::{bail, Result};
use rust_decimal::Decimal;
use teller_core::{Account, Profile, TransactionIntent, TxnKind};
use teller_flows::{
    fetch_balance, load_accounts, search_account, Capability, CreateAccountFlow, LinkAccountFlow,
    PinChangeFlow, TransactionOrchestrator,
};
use teller_gateway::CreateAccountRequest;
use teller_store::SessionStore;

pub async fn list(api_url: &str, store: &SessionStore) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ListAccounts)?;

    let gateway = gateway_for(api_url, &session);
    let accounts = load_accounts(&gateway)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    if accounts.is_empty() {
        println!("No accounts linked to this session.");
        return Ok(());
    }

    for account in accounts.accounts() {
        let marker = match accounts.selected() {
            Some(selected) if selected.account_number == account.account_number => "*",
            _ => " ",
        };
        println!(
            " {} #{:<10} {:<13} ${:.2}",
            marker,
            account.account_number,
            account.account_type.as_str(),
            account.display_balance()
        );
    }

    Ok(())
}

pub async fn balance(api_url: &str, store: &SessionStore, account_number: &str) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ListAccounts)?;

    if !session.owns_account(account_number) {
        bail!("This terminal session is limited to its own account");
    }

    let gateway = gateway_for(api_url, &session);
    let balance = fetch_balance(&gateway, account_number)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    println!("   Account:     #{}", account_number);
    println!("   Balance:     ${:.2}", balance.round_dp(2));
    Ok(())
}

pub async fn transact(
    api_url: &str,
    store: &SessionStore,
    kind: TxnKind,
    account_number: &str,
    amount: Decimal,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::Transact)?;

    if !session.owns_account(account_number) {
        bail!("This terminal session is limited to its own account");
    }

    let gateway = gateway_for(api_url, &session);
    let mut accounts = load_accounts(&gateway)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    // The dashboard only operates accounts reachable from this session;
    // non-numeric input falls through to the orchestrator's validation.
    if let Ok(number) = account_number.parse::<u32>() {
        if !accounts.select(number) {
            bail!("No account #{} is linked to this session", number);
        }
    }

    let intent = match kind {
        TxnKind::Deposit => TransactionIntent::deposit(account_number, amount),
        TxnKind::Withdraw => TransactionIntent::withdraw(account_number, amount),
    };

    let mut orchestrator = TransactionOrchestrator::new(gateway);
    let state = orchestrator.submit(&intent, &mut accounts).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            if let Some(account) = accounts.selected() {
                println!("   Account:     #{}", account.account_number);
                println!("   Balance:     ${:.2}", account.display_balance());
            }
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Transaction failed")),
    }
}

pub async fn update_pin(
    api_url: &str,
    store: &SessionStore,
    account_number: &str,
    new_pin: &str,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ChangePin)?;

    if !session.owns_account(account_number) {
        bail!("This terminal session is limited to its own account");
    }

    let gateway = gateway_for(api_url, &session);
    let mut accounts = load_accounts(&gateway)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    let mut flow = PinChangeFlow::new(gateway);
    let state = flow.submit(account_number, new_pin, &mut accounts).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Failed to update PIN")),
    }
}

pub async fn create(
    api_url: &str,
    store: &SessionStore,
    account_number: &str,
    pin: &str,
    account_type: AccountTypeArg,
    initial_balance: Decimal,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let request = CreateAccountRequest {
        account_number: account_number.to_string(),
        pin: pin.to_string(),
        account_type: account_type.to_core_type(),
        initial_balance,
    };

    let gateway = gateway_for(api_url, &session);
    let mut flow = CreateAccountFlow::new(gateway);
    let state = flow.submit(&request).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            println!("   Account:     #{}", request.account_number);
            println!("   Type:        {}", request.account_type);
            println!("   Balance:     ${:.2}", request.initial_balance.round_dp(2));
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Failed to create account")),
    }
}

pub async fn search(api_url: &str, store: &SessionStore, account_number: &str) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let gateway = gateway_for(api_url, &session);
    let payload = search_account(&gateway, account_number)
        .await
        .map_err(|failure| anyhow::anyhow!("{}", failure))?;

    if !payload.found {
        println!("No account #{} on record.", account_number);
        return Ok(());
    }

    if let Some(account) = &payload.account {
        print_account(account);
    }
    match &payload.profile {
        Some(profile) => print_profile(profile),
        None => println!("   Profile:     (none linked)"),
    }

    Ok(())
}

pub async fn link(
    api_url: &str,
    store: &SessionStore,
    account_number: &str,
    username: &str,
) -> Result<()> {
    let session = require_session(store)?;
    require_capability(&session, Capability::ManageLedger)?;

    let gateway = gateway_for(api_url, &session);
    let mut flow = LinkAccountFlow::new(gateway);
    let state = flow.submit(account_number, username).await;

    match state.receipt() {
        Some(receipt) => {
            println!("✅ {}", receipt.message);
            println!("   Account:     #{}", account_number);
            println!("   Profile:     {}", username.trim());
            Ok(())
        }
        None => bail!("{}", state.message().unwrap_or("Failed to link account")),
    }
}

fn print_account(account: &Account) {
    println!("   Account:     #{}", account.account_number);
    println!("   Type:        {}", account.account_type);
    println!("   Balance:     ${:.2}", account.display_balance());
    println!("   PIN:         {}", account.pin);
}

fn print_profile(profile: &Profile) {
    println!("   Profile:     {}", profile.username);
    if !profile.name.is_empty() {
        println!("   Name:        {}", profile.name);
    }
    if !profile.email.is_empty() {
        println!("   Email:       {}", profile.email);
    }
    if !profile.phone.is_empty() {
        println!("   Phone:       {}", profile.phone);
    }
    if !profile.credit_score.is_empty() {
        println!("   Credit:      {}", profile.credit_score);
    }
}
