use rust_decimal::Decimal;

use crate::ledger::WithdrawalPolicy;

/// Which menu the shell offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Deposit, withdraw and statement only, plain text statement.
    Basic,
    /// Adds user and account registration, tabular statement.
    Extended,
}

#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Branch code stamped on every opened account.
    pub branch: String,
    pub withdrawal_limit: Decimal,
    pub max_withdrawals: u32,
    pub variant: Variant,
}

impl BankConfig {
    pub fn basic() -> Self {
        Self {
            variant: Variant::Basic,
            ..Self::default()
        }
    }

    pub fn withdrawal_policy(&self) -> WithdrawalPolicy {
        WithdrawalPolicy {
            limit: self.withdrawal_limit,
            max_count: self.max_withdrawals,
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: "0001".to_owned(),
            withdrawal_limit: Decimal::from(500),
            max_withdrawals: 3,
            variant: Variant::Extended,
        }
    }
}
