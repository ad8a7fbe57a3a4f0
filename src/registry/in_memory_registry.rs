use std::rc::Rc;

use tracing::{debug, info};

use crate::cpf::{self, Cpf};

use super::{Account, AccountNumber, NewUser, Registry, RegistryError, User, parse_birth_date};

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    users: Vec<Rc<User>>,
    accounts: Vec<Account>,
}

impl InMemoryRegistry {
    pub fn users(&self) -> &[Rc<User>] {
        &self.users
    }

    fn next_account_number(&self) -> AccountNumber {
        self.accounts.len() as AccountNumber + 1
    }
}

impl Registry for InMemoryRegistry {
    fn register_user(&mut self, user: NewUser<'_>) -> Result<Rc<User>, RegistryError> {
        let cpf = Cpf::parse(user.cpf)?;
        if self.users.iter().any(|u| u.cpf == cpf) {
            debug!(%cpf, "user already registered");
            return Err(RegistryError::DuplicateCpf { cpf });
        }
        let birth_date = parse_birth_date(user.birth_date)?;

        let user = Rc::new(User {
            name: user.name.trim().to_owned(),
            birth_date,
            cpf,
            address: user.address.trim().to_owned(),
        });
        info!(cpf = %user.cpf, "user registered");
        self.users.push(Rc::clone(&user));
        Ok(user)
    }

    fn find_user(&self, cpf: &str) -> Option<Rc<User>> {
        let digits = cpf::normalize(cpf);
        self.users
            .iter()
            .find(|u| u.cpf.digits()[..] == digits[..])
            .cloned()
    }

    fn open_account(&mut self, branch: &str, cpf: &str) -> Result<Account, RegistryError> {
        let Some(holder) = self.find_user(cpf) else {
            debug!(cpf, "no user for new account");
            return Err(RegistryError::UserNotFound);
        };
        let account = Account {
            branch: branch.to_owned(),
            number: self.next_account_number(),
            holder,
        };
        info!(branch, number = account.number, cpf = %account.holder.cpf, "account opened");
        self.accounts.push(account.clone());
        Ok(account)
    }

    fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
