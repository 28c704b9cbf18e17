//! # Account List/Selection State
//!
//! The last-fetched account set plus a selected-account pointer, owned by
//! one multi-account view. Selection is keyed by account number so a
//! refresh re-points it at the fresh copy of the same account.

use crate::state::Failure;
use rust_decimal::Decimal;
use teller_core::{is_valid_account_number, Account, CoreError};
use teller_gateway::{ApiResult, LedgerGateway};

const LOAD_FALLBACK: &str = "Failed to load accounts";
const BALANCE_FALLBACK: &str = "Failed to load balance";

/// Account set and selection for one view.
///
/// Accounts are kept in server-returned order; the client never re-sorts.
#[derive(Debug, Clone, Default)]
pub struct AccountListState {
    accounts: Vec<Account>,
    selected: Option<u32>,
}

impl AccountListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a first successful fetch; selection starts on the first
    /// account in server-returned order.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let mut state = Self::new();
        state.apply_refresh(accounts);
        state
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// The currently selected account, always read out of the latest
    /// fetched set.
    pub fn selected(&self) -> Option<&Account> {
        let number = self.selected?;
        self.accounts.iter().find(|a| a.account_number == number)
    }

    /// Select an account by number. Returns false if the number is not in
    /// the current set (selection is unchanged).
    pub fn select(&mut self, account_number: u32) -> bool {
        if self.accounts.iter().any(|a| a.account_number == account_number) {
            self.selected = Some(account_number);
            true
        } else {
            false
        }
    }

    /// Replace the set with a fresh fetch. If the selected account number
    /// survives, selection stays on it (now pointing at the refreshed
    /// copy); otherwise it falls back to the first available account, or
    /// to none.
    pub fn apply_refresh(&mut self, fresh: Vec<Account>) {
        let surviving = self
            .selected
            .filter(|number| fresh.iter().any(|a| a.account_number == *number));
        self.selected = surviving.or_else(|| fresh.first().map(|a| a.account_number));
        self.accounts = fresh;
    }
}

/// Fetch the session's account set and seed a selection state from it.
pub async fn load_accounts<G: LedgerGateway>(gateway: &G) -> Result<AccountListState, Failure> {
    match gateway.get_accounts().await {
        Ok(ApiResult::Accepted(payload)) => Ok(AccountListState::from_accounts(payload.accounts)),
        Ok(ApiResult::Rejected { message }) => Err(Failure::rejection(message, LOAD_FALLBACK)),
        Err(err) => Err(Failure::transport(&err, LOAD_FALLBACK)),
    }
}

/// Fetch one account's server-side balance.
pub async fn fetch_balance<G: LedgerGateway>(
    gateway: &G,
    account_number: &str,
) -> Result<Decimal, Failure> {
    if !is_valid_account_number(account_number) {
        return Err(Failure::validation(CoreError::InvalidAccountNumber));
    }
    match gateway.get_balance(account_number).await {
        Ok(ApiResult::Accepted(payload)) => Ok(payload.balance),
        Ok(ApiResult::Rejected { message }) => Err(Failure::rejection(message, BALANCE_FALLBACK)),
        Err(err) => Err(Failure::transport(&err, BALANCE_FALLBACK)),
    }
}

/// Re-fetch after an accepted mutation. A failed refresh leaves the
/// stale snapshot in place and goes to the log; the mutation itself has
/// already been accepted by the ledger.
pub(crate) async fn refresh_accounts<G: LedgerGateway>(gateway: &G, state: &mut AccountListState) {
    match gateway.get_accounts().await {
        Ok(ApiResult::Accepted(payload)) => state.apply_refresh(payload.accounts),
        Ok(ApiResult::Rejected { message }) => {
            tracing::warn!(?message, "account refresh rejected")
        }
        Err(err) => tracing::warn!(%err, "account refresh failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use teller_core::AccountType;

    fn account(number: u32, balance: rust_decimal::Decimal) -> Account {
        Account {
            account_number: number,
            pin: "1111".to_string(),
            account_type: AccountType::Checking,
            balance,
        }
    }

    #[test]
    fn test_initial_selection_is_first_in_server_order() {
        let state = AccountListState::from_accounts(vec![
            account(102, dec!(20)),
            account(101, dec!(10)),
        ]);
        assert_eq!(state.selected().unwrap().account_number, 102);
    }

    #[test]
    fn test_empty_fetch_selects_nothing() {
        let state = AccountListState::from_accounts(vec![]);
        assert!(state.is_empty());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_refresh_keeps_surviving_selection() {
        let mut state = AccountListState::from_accounts(vec![
            account(101, dec!(10)),
            account(102, dec!(20)),
        ]);
        assert!(state.select(101));

        state.apply_refresh(vec![account(101, dec!(35)), account(103, dec!(5))]);

        let selected = state.selected().unwrap();
        assert_eq!(selected.account_number, 101);
        // Same identity, new balance - the refreshed copy
        assert_eq!(selected.balance, dec!(35));
    }

    #[test]
    fn test_refresh_falls_back_to_first_remaining() {
        let mut state = AccountListState::from_accounts(vec![
            account(101, dec!(10)),
            account(102, dec!(20)),
        ]);
        assert!(state.select(101));

        state.apply_refresh(vec![account(102, dec!(20)), account(103, dec!(5))]);
        assert_eq!(state.selected().unwrap().account_number, 102);
    }

    #[test]
    fn test_refresh_to_empty_clears_selection() {
        let mut state = AccountListState::from_accounts(vec![account(101, dec!(10))]);
        state.apply_refresh(vec![]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_unknown_account_is_refused() {
        let mut state = AccountListState::from_accounts(vec![account(101, dec!(10))]);
        assert!(!state.select(999));
        assert_eq!(state.selected().unwrap().account_number, 101);
    }

    #[tokio::test]
    async fn test_fetch_balance_validates_number_locally() {
        use teller_gateway::MockLedgerGateway;

        // No expectations: a gateway call would fail the test
        let gateway = MockLedgerGateway::new();
        let err = fetch_balance(&gateway, "12").await.unwrap_err();
        assert_eq!(err.message(), "Account number must be at least 4 digits");
    }

    #[tokio::test]
    async fn test_fetch_balance_returns_server_figure() {
        use teller_gateway::{BalancePayload, MockLedgerGateway};

        let mut gateway = MockLedgerGateway::new();
        gateway
            .expect_get_balance()
            .times(1)
            .withf(|number| number == "5000")
            .returning(|_| Ok(ApiResult::Accepted(BalancePayload { balance: dec!(75.00) })));

        let balance = fetch_balance(&gateway, "5000").await.unwrap();
        assert_eq!(balance, dec!(75.00));
    }
}
