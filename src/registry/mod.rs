use std::rc::Rc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::cpf::{Cpf, CpfError};

pub mod in_memory_registry;

pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

pub type AccountNumber = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub birth_date: NaiveDate,
    pub cpf: Cpf,
    pub address: String,
}

/// The holder is shared with the user list, not owned by the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub branch: String,
    pub number: AccountNumber,
    pub holder: Rc<User>,
}

/// Input for [`Registry::register_user`], exactly as typed by the user.
#[derive(Debug, Clone, Copy)]
pub struct NewUser<'a> {
    pub cpf: &'a str,
    pub name: &'a str,
    pub birth_date: &'a str,
    pub address: &'a str,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("CPF inválido. {0}")]
    InvalidCpf(#[from] CpfError),
    #[error("Já existe usuário com esse CPF!")]
    DuplicateCpf { cpf: Cpf },
    #[error("Data de nascimento inválida. Use o formato dd-mm-aaaa.")]
    InvalidBirthDate(#[from] chrono::ParseError),
    #[error("Usuário não encontrado, fluxo de criação de conta encerrado!")]
    UserNotFound,
}

pub fn parse_birth_date(input: &str) -> Result<NaiveDate, RegistryError> {
    Ok(NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT)?)
}

/// Users and accounts of the session.
///
/// Lookups take the CPF as typed; punctuation is ignored.
pub trait Registry {
    fn register_user(&mut self, user: NewUser<'_>) -> Result<Rc<User>, RegistryError>;

    fn find_user(&self, cpf: &str) -> Option<Rc<User>>;

    /// Opens the next account for the user owning `cpf`. Numbers start at 1.
    fn open_account(&mut self, branch: &str, cpf: &str) -> Result<Account, RegistryError>;

    /// Accounts in the order they were opened.
    fn accounts(&self) -> &[Account];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_format() {
        assert_eq!(
            parse_birth_date("05-11-1990").unwrap(),
            NaiveDate::from_ymd_opt(1990, 11, 5).unwrap()
        );
        assert_eq!(
            parse_birth_date(" 5-1-1990\n").unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 5).unwrap()
        );

        for bad in ["1990-11-05", "05/11/1990", "31-02-1990", "", "ontem"] {
            let err = parse_birth_date(bad).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidBirthDate(_)), "{bad}");
            assert_eq!(
                err.to_string(),
                "Data de nascimento inválida. Use o formato dd-mm-aaaa."
            );
        }
    }
}
