//! # Teller Gateway
//!
//! Typed request/response wrappers around the four remote resource groups
//! of the ledger service (auth, accounts, profiles, logs).
//!
//! Every call attaches the session credential as a bearer token when one
//! is held, serializes a typed request body, and decodes the response
//! through a single interpreter into [`ApiResult`]: accepted payload,
//! server rejection, or a transport-level [`GatewayError`]. This layer
//! performs no retries and never decides what a rejection means - that
//! belongs to the orchestration layer.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teller_gateway::{HttpGateway, LedgerGateway};
//!
//! let gateway = HttpGateway::new("http://localhost:8080/api");
//! let login = gateway.atm_login("5000", "4321").await?;
//! ```

pub mod error;
pub mod http;
pub mod types;

pub use error::{GatewayError, GatewayResult};
pub use http::HttpGateway;
pub use types::{
    Acked, AccountsPayload, ApiResult, AtmCredentials, BalancePayload, CreateAccountRequest,
    CreateProfileRequest, Credentials, LinkRequest, LoginPayload, LogsPayload, MessagePayload,
    SearchAccountPayload, SearchProfilePayload, TransactionRequest, UpdatePinRequest,
    UpdateProfileRequest,
};

use async_trait::async_trait;
use rust_decimal::Decimal;

/// One method per remote ledger operation.
///
/// The production implementation is [`HttpGateway`]; orchestration tests
/// substitute a mock (enable the `mocks` feature for a generated
/// `MockLedgerGateway`).
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    // === auth ===
    async fn employee_login(
        &self,
        username: &str,
        password: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>>;

    async fn customer_login(
        &self,
        username: &str,
        password: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>>;

    async fn atm_login(
        &self,
        account_number: &str,
        pin: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>>;

    async fn logout(&self) -> GatewayResult<ApiResult<Acked>>;

    // === accounts ===
    async fn get_accounts(&self) -> GatewayResult<ApiResult<AccountsPayload>>;

    async fn get_balance(&self, account_number: &str) -> GatewayResult<ApiResult<BalancePayload>>;

    async fn deposit(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> GatewayResult<ApiResult<MessagePayload>>;

    async fn withdraw(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> GatewayResult<ApiResult<MessagePayload>>;

    async fn update_pin(
        &self,
        account_number: &str,
        new_pin: &str,
    ) -> GatewayResult<ApiResult<Acked>>;

    async fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> GatewayResult<ApiResult<MessagePayload>>;

    async fn search_account(
        &self,
        account_number: &str,
    ) -> GatewayResult<ApiResult<SearchAccountPayload>>;

    async fn link_account(
        &self,
        account_number: &str,
        username: &str,
    ) -> GatewayResult<ApiResult<Acked>>;

    // === profiles ===
    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> GatewayResult<ApiResult<Acked>>;

    async fn search_profile(
        &self,
        username: &str,
    ) -> GatewayResult<ApiResult<SearchProfilePayload>>;

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> GatewayResult<ApiResult<MessagePayload>>;

    // === logs ===
    async fn get_logs(&self) -> GatewayResult<ApiResult<LogsPayload>>;
}
