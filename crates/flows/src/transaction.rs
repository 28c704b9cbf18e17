//! # Transaction Orchestrator
//!
//! Drives one deposit/withdraw attempt: validate the intent locally,
//! submit exactly one request, interpret the result, and re-fetch the
//! account set before reporting success so the displayed balance is
//! never more stale than one round trip.

use crate::accounts::{refresh_accounts, AccountListState};
use crate::state::{AttemptState, Failure, Receipt};
use teller_core::{TransactionIntent, TxnKind};
use teller_gateway::{ApiResult, LedgerGateway};

const TXN_FALLBACK: &str = "Transaction failed. Please try again.";

/// Orchestrates deposit/withdraw attempts for one view.
///
/// Each view owns its own instance; the attempt state is exposed for
/// rendering and is only ever advanced by [`submit`](Self::submit) and
/// [`edit`](Self::edit).
pub struct TransactionOrchestrator<G> {
    gateway: G,
    state: AttemptState,
}

impl<G: LedgerGateway> TransactionOrchestrator<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: AttemptState::Idle,
        }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    /// The user changed the amount or toggled the transaction type:
    /// settled state resets to idle and the prior message is cleared.
    pub fn edit(&mut self) {
        self.state.reset();
    }

    /// Run one attempt to completion.
    ///
    /// Single-flight: while an attempt is `Submitting`, further submits
    /// are ignored - exactly one request per intent reaches the gateway.
    /// Validation failures settle locally without any network call.
    pub async fn submit(
        &mut self,
        intent: &TransactionIntent,
        accounts: &mut AccountListState,
    ) -> &AttemptState {
        if self.state.is_submitting() {
            return &self.state;
        }

        self.state = AttemptState::Validating;
        if let Err(err) = intent.validate() {
            self.state = AttemptState::Settled(Err(Failure::validation(err)));
            return &self.state;
        }

        self.state = AttemptState::Submitting;
        let call = match intent.kind {
            TxnKind::Deposit => {
                self.gateway
                    .deposit(&intent.account_number, intent.amount)
                    .await
            }
            TxnKind::Withdraw => {
                self.gateway
                    .withdraw(&intent.account_number, intent.amount)
                    .await
            }
        };

        self.state = match call {
            Ok(ApiResult::Accepted(payload)) => {
                // Refresh before reporting success: the settled balance is
                // server-sourced, never computed locally.
                refresh_accounts(&self.gateway, accounts).await;
                let message = payload
                    .message
                    .unwrap_or_else(|| "Transaction successful!".to_string());
                AttemptState::Settled(Ok(Receipt::new(message)))
            }
            Ok(ApiResult::Rejected { message }) => {
                AttemptState::Settled(Err(Failure::rejection(message, TXN_FALLBACK)))
            }
            Err(err) => AttemptState::Settled(Err(Failure::transport(&err, TXN_FALLBACK))),
        };
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FailureKind;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use teller_core::{Account, AccountType};
    use teller_gateway::{AccountsPayload, GatewayError, MessagePayload, MockLedgerGateway};

    fn account(number: u32, balance: Decimal) -> Account {
        Account {
            account_number: number,
            pin: "4321".to_string(),
            account_type: AccountType::Checking,
            balance,
        }
    }

    #[tokio::test]
    async fn test_invalid_amount_never_reaches_the_gateway() {
        // No expectations set: any gateway call would panic the test
        let mut orchestrator = TransactionOrchestrator::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();

        let intent = TransactionIntent::deposit("5000", Decimal::ZERO);
        let state = orchestrator.submit(&intent, &mut accounts).await;

        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Validation);
        assert_eq!(failure.message(), "Please enter a valid amount");
    }

    #[tokio::test]
    async fn test_bad_account_number_never_reaches_the_gateway() {
        let mut orchestrator = TransactionOrchestrator::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();

        let intent = TransactionIntent::withdraw("12a", dec!(10));
        let state = orchestrator.submit(&intent, &mut accounts).await;
        assert_eq!(
            state.failure().unwrap().message(),
            "Account number must be at least 4 digits"
        );
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_ignored() {
        let mut orchestrator = TransactionOrchestrator::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();
        orchestrator.state = AttemptState::Submitting;

        let intent = TransactionIntent::deposit("5000", dec!(10));
        let state = orchestrator.submit(&intent, &mut accounts).await;

        // Still in flight, and the mock saw zero calls
        assert!(state.is_submitting());
    }

    #[tokio::test]
    async fn test_successful_withdraw_refreshes_before_settling() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_withdraw()
            .times(1)
            .withf(|number, amount| number == "5000" && *amount == dec!(25.00))
            .returning(|_, _| {
                Ok(ApiResult::Accepted(MessagePayload {
                    message: Some("Withdrawal successful".to_string()),
                }))
            });
        gateway.expect_get_accounts().times(1).returning(|| {
            Ok(ApiResult::Accepted(AccountsPayload {
                accounts: vec![account(5000, dec!(75.00))],
            }))
        });

        let mut orchestrator = TransactionOrchestrator::new(gateway);
        let mut accounts = AccountListState::from_accounts(vec![account(5000, dec!(100.00))]);

        let intent = TransactionIntent::withdraw("5000", dec!(25.00));
        let state = orchestrator.submit(&intent, &mut accounts).await;

        assert!(state.succeeded());
        assert_eq!(state.message(), Some("Withdrawal successful"));
        // Balance is the server's refreshed figure, not a local subtraction
        assert_eq!(accounts.selected().unwrap().balance, dec!(75.00));
    }

    #[tokio::test]
    async fn test_deposit_routes_to_the_deposit_operation() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_deposit()
            .times(1)
            .withf(|number, amount| number == "1001" && *amount == dec!(50))
            .returning(|_, _| Ok(ApiResult::Accepted(MessagePayload { message: None })));
        gateway.expect_get_accounts().times(1).returning(|| {
            Ok(ApiResult::Accepted(AccountsPayload {
                accounts: vec![account(1001, dec!(150.00))],
            }))
        });

        let mut orchestrator = TransactionOrchestrator::new(gateway);
        let mut accounts = AccountListState::from_accounts(vec![account(1001, dec!(100.00))]);

        let intent = TransactionIntent::deposit("1001", dec!(50));
        let state = orchestrator.submit(&intent, &mut accounts).await;

        assert!(state.succeeded());
        assert_eq!(state.message(), Some("Transaction successful!"));
        assert_eq!(accounts.selected().unwrap().balance, dec!(150.00));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_message_verbatim() {
        let mut gateway = MockLedgerGateway::new();
        gateway.expect_withdraw().times(1).returning(|_, _| {
            Ok(ApiResult::Rejected {
                message: Some("Insufficient funds".to_string()),
            })
        });
        // No refresh on failure - expect_get_accounts is deliberately absent

        let mut orchestrator = TransactionOrchestrator::new(gateway);
        let mut accounts = AccountListState::from_accounts(vec![account(5000, dec!(10.00))]);

        let intent = TransactionIntent::withdraw("5000", dec!(25.00));
        let state = orchestrator.submit(&intent, &mut accounts).await;

        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Rejection);
        assert_eq!(failure.message(), "Insufficient funds");
        // Snapshot untouched
        assert_eq!(accounts.selected().unwrap().balance, dec!(10.00));
    }

    #[tokio::test]
    async fn test_transport_failure_normalizes_to_generic_message() {
        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_deposit()
            .times(1)
            .returning(|_, _| Err(GatewayError::Http { status: 502 }));

        let mut orchestrator = TransactionOrchestrator::new(gateway);
        let mut accounts = AccountListState::new();

        let intent = TransactionIntent::deposit("5000", dec!(10));
        let state = orchestrator.submit(&intent, &mut accounts).await;

        let failure = state.failure().unwrap();
        assert_eq!(failure.kind(), FailureKind::Transport);
        assert_eq!(failure.message(), "Transaction failed. Please try again.");
    }

    #[tokio::test]
    async fn test_edit_resets_settled_state() {
        let mut orchestrator = TransactionOrchestrator::new(MockLedgerGateway::new());
        let mut accounts = AccountListState::new();

        let intent = TransactionIntent::deposit("5000", Decimal::ZERO);
        orchestrator.submit(&intent, &mut accounts).await;
        assert!(orchestrator.state().is_settled());

        orchestrator.edit();
        assert!(orchestrator.state().is_idle());
    }
}
