//! HTTP implementation of the ledger gateway, built on reqwest.
//!
//! Responses are interpreted uniformly: every body is expected to carry a
//! `success` boolean discriminator plus either the operation payload or
//! an `error` message. Non-success HTTP statuses with a readable envelope
//! are still routed through the discriminator - the transport error path
//! is reserved for bodies the client cannot understand at all.

use crate::error::{GatewayError, GatewayResult};
use crate::types::{
    Acked, AccountsPayload, ApiResult, AtmCredentials, BalancePayload, CreateAccountRequest,
    CreateProfileRequest, Credentials, LinkRequest, LoginPayload, LogsPayload, MessagePayload,
    SearchAccountPayload, SearchProfilePayload, TransactionRequest, UpdatePinRequest,
    UpdateProfileRequest,
};
use crate::LedgerGateway;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Gateway client for one ledger service endpoint.
///
/// Cheap to clone; holds the bearer credential for the current session,
/// if any. A login produces a new client via [`HttpGateway::with_token`].
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateway {
    /// Unauthenticated client (login and other pre-session calls).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Client that attaches `Authorization: Bearer <token>` to every call.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::new(base_url)
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<ApiResult<T>> {
        tracing::debug!(path, "issuing POST to ledger");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        interpret(status, &bytes)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> GatewayResult<ApiResult<T>> {
        tracing::debug!(path, "issuing GET to ledger");
        let mut request = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        interpret(status, &bytes)
    }
}

/// Decode one response body against the declared payload type.
fn interpret<T: DeserializeOwned>(status: u16, body: &[u8]) -> GatewayResult<ApiResult<T>> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if !(200..300).contains(&status) => return Err(GatewayError::Http { status }),
        Err(err) => return Err(GatewayError::Decode(err.to_string())),
    };

    match value.get("success").and_then(Value::as_bool) {
        Some(true) => serde_json::from_value::<T>(value)
            .map(ApiResult::Accepted)
            .map_err(|err| GatewayError::Decode(err.to_string())),
        Some(false) => {
            let message = value
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string);
            Ok(ApiResult::Rejected { message })
        }
        None => Err(GatewayError::Decode(
            "response is missing the success discriminator".to_string(),
        )),
    }
}

#[async_trait]
impl LedgerGateway for HttpGateway {
    async fn employee_login(
        &self,
        username: &str,
        password: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>> {
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/employee-login", &body).await
    }

    async fn customer_login(
        &self,
        username: &str,
        password: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>> {
        let body = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/customer-login", &body).await
    }

    async fn atm_login(
        &self,
        account_number: &str,
        pin: &str,
    ) -> GatewayResult<ApiResult<LoginPayload>> {
        let body = AtmCredentials {
            account_number: account_number.to_string(),
            pin: pin.to_string(),
        };
        self.post("/auth/atm-login", &body).await
    }

    async fn logout(&self) -> GatewayResult<ApiResult<Acked>> {
        self.post("/auth/logout", &serde_json::json!({})).await
    }

    async fn get_accounts(&self) -> GatewayResult<ApiResult<AccountsPayload>> {
        self.get("/accounts", &[]).await
    }

    async fn get_balance(&self, account_number: &str) -> GatewayResult<ApiResult<BalancePayload>> {
        self.get("/accounts/balance", &[("accountNumber", account_number)])
            .await
    }

    async fn deposit(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> GatewayResult<ApiResult<MessagePayload>> {
        let body = TransactionRequest {
            account_number: account_number.to_string(),
            amount,
        };
        self.post("/accounts/deposit", &body).await
    }

    async fn withdraw(
        &self,
        account_number: &str,
        amount: Decimal,
    ) -> GatewayResult<ApiResult<MessagePayload>> {
        let body = TransactionRequest {
            account_number: account_number.to_string(),
            amount,
        };
        self.post("/accounts/withdraw", &body).await
    }

    async fn update_pin(
        &self,
        account_number: &str,
        new_pin: &str,
    ) -> GatewayResult<ApiResult<Acked>> {
        let body = UpdatePinRequest {
            account_number: account_number.to_string(),
            pin: new_pin.to_string(),
        };
        self.post("/accounts/update-pin", &body).await
    }

    async fn create_account(
        &self,
        request: &CreateAccountRequest,
    ) -> GatewayResult<ApiResult<MessagePayload>> {
        self.post("/accounts/create", request).await
    }

    async fn search_account(
        &self,
        account_number: &str,
    ) -> GatewayResult<ApiResult<SearchAccountPayload>> {
        self.get("/accounts/search", &[("accountNumber", account_number)])
            .await
    }

    async fn link_account(
        &self,
        account_number: &str,
        username: &str,
    ) -> GatewayResult<ApiResult<Acked>> {
        let body = LinkRequest {
            account_number: account_number.to_string(),
            username: username.to_string(),
        };
        self.post("/accounts/link", &body).await
    }

    async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> GatewayResult<ApiResult<Acked>> {
        self.post("/profiles/create", request).await
    }

    async fn search_profile(
        &self,
        username: &str,
    ) -> GatewayResult<ApiResult<SearchProfilePayload>> {
        self.get("/profiles/search", &[("username", username)]).await
    }

    async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> GatewayResult<ApiResult<MessagePayload>> {
        self.post("/profiles/update", request).await
    }

    async fn get_logs(&self) -> GatewayResult<ApiResult<LogsPayload>> {
        self.get("/logs", &[]).await
    }
}
