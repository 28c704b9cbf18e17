//! Teller CLI - banking client operations from the command line
//!
//! Usage:
//! ```bash
//! teller login atm 5000 4321
//! teller deposit 5000 100.00
//! teller withdraw 5000 25.00
//! teller update-pin 5000 9876
//! teller login employee admin secret
//! teller create-account 7001 1234 --type checking --initial-balance 100
//! teller search 7001
//! teller link 7001 alice
//! teller logout
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;
use teller_core::TxnKind;
use teller_store::SessionStore;

mod commands;

use commands::{account, audit, auth, profile};

/// Teller - command-line client for a remote banking ledger
#[derive(Parser)]
#[command(name = "teller")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ledger service API base URL
    #[arg(long, default_value = "http://localhost:8080/api", global = true)]
    pub api_url: String,

    /// Persisted session record path
    #[arg(long, default_value = "data/session.json", global = true)]
    pub session_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Authenticate against the ledger service
    Login {
        #[command(subcommand)]
        action: LoginAction,
    },

    /// End the session and clear the persisted record
    Logout,

    /// List the accounts reachable from this session
    Accounts,

    /// Show one account's current balance
    Balance {
        /// Account number
        account_number: String,
    },

    /// Deposit funds into an account
    Deposit {
        /// Account number (e.g. 5000)
        account_number: String,
        /// Amount to deposit
        amount: Decimal,
    },

    /// Withdraw funds from an account
    Withdraw {
        /// Account number
        account_number: String,
        /// Amount to withdraw
        amount: Decimal,
    },

    /// Change an account PIN
    UpdatePin {
        /// Account number
        account_number: String,
        /// New 4-digit PIN
        new_pin: String,
    },

    /// Create a new account (employee only)
    CreateAccount {
        /// Account number for the new account (at least 4 digits)
        account_number: String,
        /// Initial 4-digit PIN
        pin: String,
        /// Account type
        #[arg(long, short = 't', default_value = "checking")]
        r#type: AccountTypeArg,
        /// Opening balance
        #[arg(long, default_value = "0")]
        initial_balance: Decimal,
    },

    /// Search for an account and its linked profile (employee only)
    Search {
        /// Account number
        account_number: String,
    },

    /// Link an account to a customer profile (employee only)
    Link {
        /// Account number
        account_number: String,
        /// Profile username
        username: String,
    },

    /// Create a customer profile (employee only)
    CreateProfile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        email: String,
    },

    /// Search for a profile by username (employee only)
    SearchProfile {
        /// Profile username
        username: String,
    },

    /// Update profile fields (employee only)
    UpdateProfile {
        /// Profile username
        username: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        credit_score: Option<String>,
    },

    /// Show the ledger audit log (employee only)
    Logs,
}

#[derive(Subcommand)]
pub enum LoginAction {
    /// Employee login with username and password
    Employee { username: String, password: String },
    /// Customer login with username and password
    Customer { username: String, password: String },
    /// Terminal login with account number and PIN
    Atm {
        account_number: String,
        pin: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountTypeArg {
    Checking,
    Saving,
    LineOfCredit,
}

impl AccountTypeArg {
    pub fn to_core_type(&self) -> teller_core::AccountType {
        match self {
            AccountTypeArg::Checking => teller_core::AccountType::Checking,
            AccountTypeArg::Saving => teller_core::AccountType::Saving,
            AccountTypeArg::LineOfCredit => teller_core::AccountType::LineOfCredit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = SessionStore::new(&cli.session_file);

    match cli.command {
        Commands::Login { action } => {
            auth::login(&cli.api_url, &store, action).await?;
        }

        Commands::Logout => {
            auth::logout(&cli.api_url, &store).await?;
        }

        Commands::Accounts => {
            account::list(&cli.api_url, &store).await?;
        }

        Commands::Balance { account_number } => {
            account::balance(&cli.api_url, &store, &account_number).await?;
        }

        Commands::Deposit {
            account_number,
            amount,
        } => {
            account::transact(&cli.api_url, &store, TxnKind::Deposit, &account_number, amount)
                .await?;
        }

        Commands::Withdraw {
            account_number,
            amount,
        } => {
            account::transact(&cli.api_url, &store, TxnKind::Withdraw, &account_number, amount)
                .await?;
        }

        Commands::UpdatePin {
            account_number,
            new_pin,
        } => {
            account::update_pin(&cli.api_url, &store, &account_number, &new_pin).await?;
        }

        Commands::CreateAccount {
            account_number,
            pin,
            r#type,
            initial_balance,
        } => {
            account::create(
                &cli.api_url,
                &store,
                &account_number,
                &pin,
                r#type,
                initial_balance,
            )
            .await?;
        }

        Commands::Search { account_number } => {
            account::search(&cli.api_url, &store, &account_number).await?;
        }

        Commands::Link {
            account_number,
            username,
        } => {
            account::link(&cli.api_url, &store, &account_number, &username).await?;
        }

        Commands::CreateProfile {
            name,
            username,
            password,
            phone,
            address,
            email,
        } => {
            profile::create(
                &cli.api_url,
                &store,
                name,
                username,
                password,
                phone,
                address,
                email,
            )
            .await?;
        }

        Commands::SearchProfile { username } => {
            profile::search(&cli.api_url, &store, &username).await?;
        }

        Commands::UpdateProfile {
            username,
            name,
            password,
            phone,
            address,
            email,
            credit_score,
        } => {
            profile::update(
                &cli.api_url,
                &store,
                username,
                name,
                password,
                phone,
                address,
                email,
                credit_score,
            )
            .await?;
        }

        Commands::Logs => {
            audit::show_logs(&cli.api_url, &store).await?;
        }
    }

    Ok(())
}
