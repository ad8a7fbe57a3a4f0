use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Deposit,
    Withdraw,
    Statement,
    NewUser,
    NewAccount,
    ListAccounts,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Operação inválida, por favor selecione novamente a operação desejada.")]
    Unknown { input: String },
    #[error("Operação inválida, por favor selecione novamente a operação desejada.")]
    NotAvailable { command: MenuCommand },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Entrada inválida! Por favor, insira um número válido.")]
    NotANumber,
    #[error("O valor deve ser positivo e maior que zero.")]
    NotPositive,
}

impl MenuCommand {
    /// Whether the command is offered in the given shell variant.
    pub fn available_in(self, variant: Variant) -> bool {
        match self {
            MenuCommand::Deposit
            | MenuCommand::Withdraw
            | MenuCommand::Statement
            | MenuCommand::Quit => true,
            MenuCommand::NewUser | MenuCommand::NewAccount | MenuCommand::ListAccounts => {
                variant == Variant::Extended
            }
        }
    }

    pub fn parse_command(input: &str, variant: Variant) -> Result<Self, CommandError> {
        let command: Self = input.parse()?;
        if command.available_in(variant) {
            Ok(command)
        } else {
            Err(CommandError::NotAvailable { command })
        }
    }
}

impl FromStr for MenuCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "d" => Ok(Self::Deposit),
            "s" => Ok(Self::Withdraw),
            "e" => Ok(Self::Statement),
            "nu" => Ok(Self::NewUser),
            "nc" => Ok(Self::NewAccount),
            "lc" => Ok(Self::ListAccounts),
            "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown {
                input: other.to_owned(),
            }),
        }
    }
}

/// Parses an amount typed by the user. Only strictly positive values pass.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let amount = Decimal::from_str(input.trim()).map_err(|_| AmountError::NotANumber)?;
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(AmountError::NotPositive)
    }
}
