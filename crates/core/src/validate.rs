//! # Validation Rules
//!
//! Pure predicates applied to user input before any network call.
//! A failing predicate short-circuits the flow locally - no request
//! is ever sent for input that fails these checks.

use rust_decimal::Decimal;

/// A PIN is exactly four decimal digits.
///
/// # Examples
/// ```
/// use teller_core::validate::is_valid_pin;
///
/// assert!(is_valid_pin("0000"));
/// assert!(!is_valid_pin("123"));
/// assert!(!is_valid_pin("12a4"));
/// assert!(!is_valid_pin("12345"));
/// ```
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit())
}

/// A transaction amount is strictly positive.
///
/// `Decimal` has no NaN or infinity, so finiteness holds by construction;
/// inputs that fail to parse as a number never reach this predicate.
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// An account number is all digits and at least four of them.
pub fn is_valid_account_number(account_number: &str) -> bool {
    !account_number.is_empty()
        && account_number.len() >= 4
        && account_number.chars().all(|c| c.is_ascii_digit())
}

/// A required text field is present (non-blank).
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
