use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Depósito",
            TransactionKind::Withdrawal => "Saque",
        }
    }
}

/// Entry of the statement. Never changes once appended to a [`Ledger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub timestamp: NaiveDateTime,
    pub kind: TransactionKind,
    pub amount: Decimal,
}

/// Rules every withdrawal is checked against.
#[derive(Debug, Clone, Copy)]
pub struct WithdrawalPolicy {
    /// Largest amount a single withdrawal may take.
    pub limit: Decimal,
    /// How many withdrawals the session allows. Never reset.
    pub max_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEventKind {
    Deposited,
    Withdrawn,
}

#[derive(Debug, Clone)]
pub struct LedgerEvent {
    timestamp: NaiveDateTime,
    amount: Decimal,
    kind: LedgerEventKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Operação falhou! O valor informado é inválido.")]
    InvalidAmount,
    #[error("Operação falhou! O saldo resultante excede o valor máximo suportado.")]
    BalanceOverflow,
    #[error("Operação falhou! Você não tem saldo suficiente.")]
    InsufficientFunds,
    #[error("Operação falhou! O valor do saque excede o limite.")]
    LimitExceeded,
    #[error("Operação falhou! Número máximo de saques excedido.")]
    WithdrawalCountExceeded,
}

impl LedgerEvent {
    fn transaction(&self) -> Transaction {
        Transaction {
            timestamp: self.timestamp,
            kind: match self.kind {
                LedgerEventKind::Deposited => TransactionKind::Deposit,
                LedgerEventKind::Withdrawn => TransactionKind::Withdrawal,
            },
            amount: self.amount,
        }
    }
}

/// Balance, withdrawal counter and transaction log of the session.
///
/// State only changes through [`Ledger::apply`]; `handle_*` methods validate a
/// request and produce the event to apply.
#[derive(Debug, Default)]
pub struct Ledger {
    balance: Decimal,
    withdrawals: u32,
    log: Vec<Transaction>,
}

/// Read-only view of the ledger at a point in time.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    pub transactions: &'a [Transaction],
    pub balance: Decimal,
}

impl Ledger {
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.log
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement {
            transactions: &self.log,
            balance: self.balance,
        }
    }

    pub fn apply(&mut self, event: &LedgerEvent) {
        match event.kind {
            LedgerEventKind::Deposited => {
                self.balance += event.amount;
            }
            LedgerEventKind::Withdrawn => {
                self.balance -= event.amount;
                self.withdrawals += 1;
            }
        }
        self.log.push(event.transaction());
    }

    pub fn handle_deposit(
        &self,
        amount: Decimal,
        timestamp: NaiveDateTime,
    ) -> Result<LedgerEvent, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        if self.balance.checked_add(amount).is_none() {
            return Err(LedgerError::BalanceOverflow);
        }
        Ok(LedgerEvent {
            timestamp,
            amount,
            kind: LedgerEventKind::Deposited,
        })
    }

    /// Checks run in priority order: funds, then limit, then count.
    pub fn handle_withdrawal(
        &self,
        amount: Decimal,
        policy: &WithdrawalPolicy,
        timestamp: NaiveDateTime,
    ) -> Result<LedgerEvent, LedgerError> {
        if amount > self.balance {
            Err(LedgerError::InsufficientFunds)
        } else if amount > policy.limit {
            Err(LedgerError::LimitExceeded)
        } else if self.withdrawals >= policy.max_count {
            Err(LedgerError::WithdrawalCountExceeded)
        } else if amount <= Decimal::ZERO {
            Err(LedgerError::InvalidAmount)
        } else {
            Ok(LedgerEvent {
                timestamp,
                amount,
                kind: LedgerEventKind::Withdrawn,
            })
        }
    }

    pub fn deposit(
        &mut self,
        amount: Decimal,
        timestamp: NaiveDateTime,
    ) -> Result<Transaction, LedgerError> {
        let evt = self.handle_deposit(amount, timestamp).inspect_err(|err| {
            debug!(%amount, %err, "deposit rejected");
        })?;
        self.apply(&evt);
        info!(%amount, balance = %self.balance, "deposit applied");
        Ok(evt.transaction())
    }

    pub fn withdraw(
        &mut self,
        amount: Decimal,
        policy: &WithdrawalPolicy,
        timestamp: NaiveDateTime,
    ) -> Result<Transaction, LedgerError> {
        let evt = self
            .handle_withdrawal(amount, policy, timestamp)
            .inspect_err(|err| {
                debug!(%amount, balance = %self.balance, withdrawals = self.withdrawals, %err, "withdrawal rejected");
            })?;
        self.apply(&evt);
        info!(%amount, balance = %self.balance, withdrawals = self.withdrawals, "withdrawal applied");
        Ok(evt.transaction())
    }
}
