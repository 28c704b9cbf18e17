//! # Role Router
//!
//! Maps an authenticated session's role to the capability set (dashboard
//! variant) it may reach. The mapping is total over the closed [`Role`]
//! enum: unknown role strings are rejected where they enter the system,
//! so no permissive default can exist here.

use teller_core::Role;

/// Dashboard variant a session is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Employee,
    Customer,
    Terminal,
}

/// Operations a view can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// List own accounts and read balances
    ListAccounts,
    /// Deposit and withdraw
    Transact,
    /// Change an account PIN
    ChangePin,
    /// Create accounts/profiles, search, link, update profiles
    ManageLedger,
    /// Read the audit log
    ViewLogs,
}

impl View {
    pub fn for_role(role: Role) -> View {
        match role {
            Role::Employee => View::Employee,
            Role::Customer => View::Customer,
            Role::Atm => View::Terminal,
        }
    }

    pub fn permits(&self, capability: Capability) -> bool {
        match self {
            View::Employee => matches!(
                capability,
                Capability::ManageLedger | Capability::ViewLogs
            ),
            View::Customer | View::Terminal => matches!(
                capability,
                Capability::ListAccounts | Capability::Transact | Capability::ChangePin
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Employee => "employee dashboard",
            View::Customer => "customer dashboard",
            View::Terminal => "terminal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_role_routes_to_its_view() {
        assert_eq!(View::for_role(Role::Employee), View::Employee);
        assert_eq!(View::for_role(Role::Customer), View::Customer);
        assert_eq!(View::for_role(Role::Atm), View::Terminal);
    }

    #[test]
    fn test_employee_capabilities() {
        let view = View::Employee;
        assert!(view.permits(Capability::ManageLedger));
        assert!(view.permits(Capability::ViewLogs));
        assert!(!view.permits(Capability::Transact));
        assert!(!view.permits(Capability::ChangePin));
    }

    #[test]
    fn test_customer_and_terminal_capabilities() {
        for view in [View::Customer, View::Terminal] {
            assert!(view.permits(Capability::ListAccounts));
            assert!(view.permits(Capability::Transact));
            assert!(view.permits(Capability::ChangePin));
            assert!(!view.permits(Capability::ManageLedger));
            assert!(!view.permits(Capability::ViewLogs));
        }
    }
}
