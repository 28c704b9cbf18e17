//! # Employee Flows
//!
//! Ledger-management operations reachable from the employee view:
//! account and profile creation, account-to-profile linking, profile
//! updates, and the read-only search/log queries.
//!
//! The mutating flows follow the same Validating/Submitting/Settled
//! shape as transactions, each with its own validation predicates. The
//! queries validate input locally and pass straight through.

use crate::state::{AttemptState, Failure, Receipt};
use rust_decimal::Decimal;
use teller_core::{is_present, is_valid_account_number, is_valid_pin, CoreError};
use teller_gateway::{
    ApiResult, CreateAccountRequest, CreateProfileRequest, LedgerGateway, SearchAccountPayload,
    SearchProfilePayload, UpdateProfileRequest,
};

const CREATE_ACCOUNT_FALLBACK: &str = "Failed to create account";
const CREATE_PROFILE_FALLBACK: &str = "Failed to create profile";
const LINK_FALLBACK: &str = "Failed to link account";
const UPDATE_PROFILE_FALLBACK: &str = "Failed to update profile";

/// Orchestrates account-creation attempts.
pub struct CreateAccountFlow<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> CreateAccountFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn edit(&mut self) {
        self.state.reset();
    }

    pub async fn submit(&mut self, request: &CreateAccountRequest) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if let Err(err) = validate_new_account(request) {
            self.state = AttemptState::Settled(Err(Failure::validation(err)));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        self.state = match self.gateway.create_account(request).await {
            Ok(ApiResult::Accepted(payload)) => {
                let message = payload
                    .message
                    .unwrap_or_else(|| "Account created successfully!".to_string());
                AttemptState::Settled(Ok(Receipt::new(message)))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, CREATE_ACCOUNT_FALLBACK)))
            }
            Err(err) => {
                AttemptState::Settled(Err(Failure::transport(&err, CREATE_ACCOUNT_FALLBACK)))
            }
        };
        &self.state
    }
}

fn validate_new_account(request: &CreateAccountRequest) -> Result<(), CoreError> {
    if !is_valid_account_number(&request.account_number) {
        return Err(CoreError::InvalidAccountNumber);
    }
    if !is_valid_pin(&request.pin) {
        return Err(CoreError::InvalidPin);
    }
    if request.initial_balance < Decimal::ZERO {
        return Err(CoreError::NegativeInitialBalance);
    }
    Ok(())
}

/// Orchestrates profile-creation attempts (employee desk or
/// self-registration).
pub struct CreateProfileFlow<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> CreateProfileFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn edit(&mut self) {
        self.state.reset();
    }

    pub async fn submit(&mut self, request: &CreateProfileRequest) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if let Err(err) = validate_new_profile(request) {
            self.state = AttemptState::Settled(Err(Failure::validation(err)));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        self.state = match self.gateway.create_profile(request).await {
            Ok(ApiResult::Accepted(_)) => {
                AttemptState::Settled(Ok(Receipt::new("Profile created successfully!")))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, CREATE_PROFILE_FALLBACK)))
            }
            Err(err) => {
                AttemptState::Settled(Err(Failure::transport(&err, CREATE_PROFILE_FALLBACK)))
            }
        };
        &self.state
    }
}

fn validate_new_profile(request: &CreateProfileRequest) -> Result<(), CoreError> {
    if !is_present(&request.name) {
        return Err(CoreError::MissingField("name"));
    }
    if !is_present(&request.username) {
        return Err(CoreError::MissingField("username"));
    }
    if !is_present(&request.password) {
        return Err(CoreError::MissingField("password"));
    }
    Ok(())
}

/// Orchestrates account-to-profile link attempts.
pub struct LinkAccountFlow<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> LinkAccountFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn edit(&mut self) {
        self.state.reset();
    }

    pub async fn submit(&mut self, account_number: &str, username: &str) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if !is_valid_account_number(account_number) {
            self.state =
                AttemptState::Settled(Err(Failure::validation(CoreError::InvalidAccountNumber)));
            return &self.state;
        }
        if !is_present(username) {
            self.state =
                AttemptState::Settled(Err(Failure::validation(CoreError::MissingField("username"))));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        self.state = match self.gateway.link_account(account_number, username.trim()).await {
            Ok(ApiResult::Accepted(_)) => {
                AttemptState::Settled(Ok(Receipt::new("Account linked successfully!")))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, LINK_FALLBACK)))
            }
            Err(err) => AttemptState::Settled(Err(Failure::transport(&err, LINK_FALLBACK))),
        };
        &self.state
    }
}

/// Orchestrates partial profile updates.
pub struct UpdateProfileFlow<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> UpdateProfileFlow<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    pub fn edit(&mut self) {
        self.state.reset();
    }

    pub async fn submit(&mut self, request: &UpdateProfileRequest) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if !is_present(&request.username) {
            self.state =
                AttemptState::Settled(Err(Failure::validation(CoreError::MissingField("username"))));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        self.state = match self.gateway.update_profile(request).await {
            Ok(ApiResult::Accepted(payload)) => {
                let message = payload
                    .message
                    .unwrap_or_else(|| "Profile updated successfully!".to_string());
                AttemptState::Settled(Ok(Receipt::new(message)))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, UPDATE_PROFILE_FALLBACK)))
            }
            Err(err) => {
                AttemptState::Settled(Err(Failure::transport(&err, UPDATE_PROFILE_FALLBACK)))
            }
        };
        &self.state
    }
}

// === Read-only queries ===

/// Look up an account (and its linked profile, if any) by number.
pub async fn search_account<G: LedgerGateway>(
    gateway: &G,
    account_number: &str,
) -> Result<SearchAccountPayload, Failure> {
    if !is_valid_account_number(account_number) {
        return Err(Failure::validation(CoreError::InvalidAccountNumber));
    }
    match gateway.search_account(account_number).await {
        Ok(ApiResult::Accepted(payload)) => Ok(payload),
        Ok(ApiResult::Rejected { message }) => {
            Err(Failure::rejection(message, "Account not found"))
        }
        Err(err) => Err(Failure::transport(&err, "Search failed. Please try again.")),
    }
}

/// Look up a profile by username.
pub async fn search_profile<G: LedgerGateway>(
    gateway: &G,
    username: &str,
) -> Result<SearchProfilePayload, Failure> {
    if !is_present(username) {
        return Err(Failure::validation(CoreError::MissingField("username")));
    }
    match gateway.search_profile(username.trim()).await {
        Ok(ApiResult::Accepted(payload)) => Ok(payload),
        Ok(ApiResult::Rejected { message }) => {
            Err(Failure::rejection(message, "Profile not found"))
        }
        Err(err) => Err(Failure::transport(&err, "Search failed. Please try again.")),
    }
}

/// Fetch the audit log lines.
pub async fn fetch_logs<G: LedgerGateway>(gateway: &G) -> Result<Vec<String>, Failure> {
    match gateway.get_logs().await {
        Ok(ApiResult::Accepted(payload)) => Ok(payload.logs),
        Ok(ApiResult::Rejected { message }) => {
            Err(Failure::rejection(message, "Failed to load logs"))
        }
        Err(err) => Err(Failure::transport(&err, "Failed to load logs")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FailureKind;
    use rust_decimal_macros::dec;
    use teller_core::{Account, AccountType};
    use teller_gateway::{Acked, MessagePayload, MockLedgerGateway};

    fn new_account_request() -> CreateAccountRequest {
        CreateAccountRequest {
            account_number: "7001".to_string(),
            pin: "1234".to_string(),
            account_type: AccountType::Checking,
            initial_balance: dec!(100.00),
        }
    }

    #[tokio::test]
    async fn test_create_account_rejects_negative_balance_locally() {
        let mut flow = CreateAccountFlow::new(MockLedgerGateway::new());
        let request = CreateAccountRequest {
            initial_balance: dec!(-5),
            ..new_account_request()
        };

        let state = flow.submit(&request).await;
        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Validation);
        assert_eq!(failure.message(), "Initial balance must not be negative");
    }

    #[tokio::test]
    async fn test_create_account_allows_zero_balance() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_create_account().times(1).returning(|_| {
            Ok(ApiResult::Accepted(MessagePayload {
                message: Some("Account created successfully".to_string()),
            }))
        });

        let mut flow = CreateAccountFlow::new(gateway);
        let request = CreateAccountRequest {
            initial_balance: dec!(0),
            ..new_account_request()
        };

        let state = flow.submit(&request).await;
        assert!(state.succeeded());
    }

    #[tokio::test]
    async fn test_create_account_duplicate_rejection_is_verbatim() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_create_account().times(1).returning(|_| {
            Ok(ApiResult::Rejected {
                message: Some("Account number already exists".to_string()),
            })
        });

        let mut flow = CreateAccountFlow::new(gateway);
        let state = flow.submit(&new_account_request()).await;
        assert_eq!(state.message(), Some("Account number already exists"));
    }

    #[tokio::test]
    async fn test_create_profile_requires_password() {
        let mut flow = CreateProfileFlow::new(MockLedgerGateway::new());
        let request = CreateProfileRequest {
            name: "Alice Nguyen".to_string(),
            username: "alice".to_string(),
            password: "".to_string(),
            phone: "5551234567".to_string(),
            address: "12 Main St".to_string(),
            email: "alice@example.com".to_string(),
        };

        let state = flow.submit(&request).await;
        assert_eq!(state.message(), Some("password is required"));
    }

    #[tokio::test]
    async fn test_link_requires_username() {
        let mut flow = LinkAccountFlow::new(MockLedgerGateway::new());
        let state = flow.submit("7001", "   ").await;

        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Validation);
        assert_eq!(failure.message(), "username is required");
    }

    #[tokio::test]
    async fn test_link_trims_username_before_sending() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_link_account()
            .times(1)
            .withf(|number, username| number == "7001" && username == "alice")
            .returning(|_, _| Ok(ApiResult::Accepted(Acked {})));

        let mut flow = LinkAccountFlow::new(gateway);
        let state = flow.submit("7001", " alice ").await;
        assert!(state.succeeded());
    }

    #[tokio::test]
    async fn test_update_profile_requires_username() {
        let mut flow = UpdateProfileFlow::new(MockLedgerGateway::new());
        let request = UpdateProfileRequest::default();

        let state = flow.submit(&request).await;
        assert_eq!(state.message(), Some("username is required"));
    }

    #[tokio::test]
    async fn test_search_account_validates_number_locally() {
        let gateway = MockLedgerGateway::new();
        let err = search_account(&gateway, "12").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Validation);
    }

    #[tokio::test]
    async fn test_search_account_returns_account_and_profile() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_search_account()
            .times(1)
            .withf(|number| number == "7001")
            .returning(|_| {
                Ok(ApiResult::Accepted(SearchAccountPayload {
                    found: true,
                    account: Some(Account {
                        account_number: 7001,
                        pin: "1234".to_string(),
                        account_type: AccountType::Saving,
                        balance: dec!(250.00),
                    }),
                    profile: None,
                }))
            });

        let payload = search_account(&gateway, "7001").await.unwrap();
        assert!(payload.found);
        assert_eq!(payload.account.unwrap().account_number, 7001);
        assert!(payload.profile.is_none());
    }

    #[tokio::test]
    async fn test_search_account_not_found_rejection() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_search_account().times(1).returning(|_| {
            Ok(ApiResult::Rejected {
                message: Some("Account not found".to_string()),
            })
        });

        let err = search_account(&gateway, "9999").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Rejection);
        assert_eq!(err.message(), "Account not found");
    }

    #[tokio::test]
    async fn test_fetch_logs_passthrough() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_get_logs().times(1).returning(|| {
            Ok(ApiResult::Accepted(teller_gateway::LogsPayload {
                logs: vec!["0,login,Employee login,2026-01-01T09:00:00".to_string()],
            }))
        });

        let logs = fetch_logs(&gateway).await.unwrap();
        assert_eq!(logs.len(), 1);
    }
}
