//! # PIN Change Flow
//!
//! Same attempt shape as a transaction: validate the new PIN locally,
//! submit once, settle, and re-fetch the account set on success (both the
//! customer and terminal views re-read their snapshots after a PIN
//! change).

use crate::accounts::{refresh_accounts, AccountListState};
use crate::state::{AttemptState, Failure, Receipt};
use teller_core::{is_valid_account_number, is_valid_pin, CoreError};
use teller_gateway::{ApiResult, LedgerGateway};

const PIN_FALLBACK: &str = "Failed to update PIN";

/// Orchestrates PIN-update attempts for one view.
pub struct PinChangeFlow<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> PinChangeFlow<G> {
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

    pub async fn submit(
        &mut self,
        account_number: &str,
        new_pin: &str,
        accounts: &mut AccountListState,
    ) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if !is_valid_account_number(account_number) {
            self.state =
                AttemptState::Settled(Err(Failure::validation(CoreError::InvalidAccountNumber)));
            return &self.state;
        }
        if !is_valid_pin(new_pin) {
            self.state = AttemptState::Settled(Err(Failure::validation(CoreError::InvalidPin)));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        self.state = match self.gateway.update_pin(account_number, new_pin).await {
            Ok(ApiResult::Accepted(_)) => {
                refresh_accounts(&self.gateway, accounts).await;
                AttemptState::Settled(Ok(Receipt::new("PIN updated successfully!")))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, PIN_FALLBACK)))
            }
            Err(err) => AttemptState::Settled(Err(Failure::transport(&err, PIN_FALLBACK))),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FailureKind;
    use rust_decimal_macros::dec;
    use teller_core::{Account, AccountType};
    use teller_gateway::{Acked, AccountsPayload, MockLedgerGateway};

    fn account(number: u32, pin: &str) -> Account {
        Account {
            account_number: number,
            pin: pin.to_string(),
            account_type: AccountType::Saving,
            balance: dec!(100.00),
        }
    }

    #[tokio::test]
    async fn test_short_pin_fails_locally() {
        let mut flow = PinChangeFlow::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();

        let state = flow.submit("5000", "12", &mut accounts).await;

        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Validation);
        assert_eq!(failure.message(), "PIN must be exactly 4 digits");
    }

    #[tokio::test]
    async fn test_non_numeric_pin_fails_locally() {
        let mut flow = PinChangeFlow::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();

        let state = flow.submit("5000", "12a4", &mut accounts).await;
        assert_eq!(state.message(), Some("PIN must be exactly 4 digits"));
    }

    #[tokio::test]
    async fn test_accepted_pin_change_refreshes_snapshot() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_update_pin()
            .times(1)
            .withf(|number, pin| number == "5000" && pin == "9876")
            .returning(|_, _| Ok(ApiResult::Accepted(Acked {})));
        gateway.expect_get_accounts().times(1).returning(|| {
            Ok(ApiResult::Accepted(AccountsPayload {
                accounts: vec![account(5000, "9876")],
            }))
        });

        let mut flow = PinChangeFlow::new(gateway);
        let mut accounts = AccountListState::from_accounts(vec![account(5000, "4321")]);

        let state = flow.submit("5000", "9876", &mut accounts).await;

        assert!(state.succeeded());
        assert_eq!(state.message(), Some("PIN updated successfully!"));
        assert_eq!(accounts.selected().unwrap().pin, "9876");
    }

    #[tokio::test]
    async fn test_rejected_pin_change_keeps_server_message() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_update_pin().times(1).returning(|_, _| {
            Ok(ApiResult::Rejected {
                message: Some("PIN update failed".to_string()),
            })
        });

        let mut flow = PinChangeFlow::new(gateway);
        let mut accounts = AccountListState::new();

        let state = flow.submit("5000", "9876", &mut accounts).await;
        assert_eq!(state.message(), Some("PIN update failed"));
        assert_eq!(state.failure().unwrap().kind(), FailureKind::Rejection);
    }
}
