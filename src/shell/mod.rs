//! Interactive front end of the crate: reads menu options from a line based input,
//! drives [`Ledger`] and [`Registry`] and writes the dialogue to the output.

use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};

use anyhow::Result;
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::{
    command::{MenuCommand, parse_amount},
    config::{BankConfig, Variant},
    cpf::Cpf,
    ledger::Ledger,
    registry::{
        NewUser, Registry, RegistryError, in_memory_registry::InMemoryRegistry, parse_birth_date,
    },
};
use printer::{menu, print_accounts, print_statement};
use prompt::{prompt, prompt_until};

pub mod printer;
pub mod prompt;

const INVALID_CPF: &str = "CPF inválido. Por favor, informe um CPF válido.";

/// `Break` ends the session, either on `q` or once input runs dry.
type Flow = ControlFlow<()>;

pub struct Shell<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub config: BankConfig,
    pub clock: Box<dyn FnMut() -> NaiveDateTime>,
}

impl<'w, R, W> Shell<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut ledger = Ledger::default();
        let mut registry = InMemoryRegistry::default();
        let variant = self.config.variant;
        info!(?variant, branch = %self.config.branch, "session started");

        loop {
            let Some(line) = prompt(&mut self.input, self.output, menu(variant))? else {
                debug!("input exhausted");
                break;
            };
            let command = match MenuCommand::parse_command(&line, variant) {
                Ok(command) => command,
                Err(err) => {
                    debug!(?err, "invalid menu option");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            debug!(?command, "dispatching");

            let flow = match command {
                MenuCommand::Deposit => self.deposit(&mut ledger)?,
                MenuCommand::Withdraw => self.withdraw(&mut ledger)?,
                MenuCommand::Statement => {
                    let today = (self.clock)().date();
                    print_statement(self.output, ledger.statement(), variant, today)?;
                    Flow::Continue(())
                }
                MenuCommand::NewUser => self.new_user(&mut registry)?,
                MenuCommand::NewAccount => self.new_account(&mut registry)?,
                MenuCommand::ListAccounts => {
                    print_accounts(self.output, registry.accounts())?;
                    Flow::Continue(())
                }
                MenuCommand::Quit => Flow::Break(()),
            };
            if flow.is_break() {
                break;
            }
        }

        info!(
            balance = %ledger.balance(),
            transactions = ledger.transactions().len(),
            accounts = registry.accounts().len(),
            "session ended"
        );
        self.output.flush()?;
        Ok(())
    }

    fn deposit(&mut self, ledger: &mut Ledger) -> Result<Flow> {
        let Some(amount) = prompt_until(
            &mut self.input,
            self.output,
            "Informe o valor do depósito: ",
            parse_amount,
        )?
        else {
            return Ok(Flow::Break(()));
        };
        match ledger.deposit(amount, (self.clock)()) {
            Ok(_) => self.success("Depósito realizado com sucesso!")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn withdraw(&mut self, ledger: &mut Ledger) -> Result<Flow> {
        let Some(amount) = prompt_until(
            &mut self.input,
            self.output,
            "Informe o valor do saque: ",
            parse_amount,
        )?
        else {
            return Ok(Flow::Break(()));
        };
        let policy = self.config.withdrawal_policy();
        match ledger.withdraw(amount, &policy, (self.clock)()) {
            Ok(_) => self.success("Saque realizado com sucesso!")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue(()))
    }

    fn new_user(&mut self, registry: &mut impl Registry) -> Result<Flow> {
        let Some(cpf) = prompt_until(
            &mut self.input,
            self.output,
            "Informe o CPF (somente números): ",
            |line| {
                Cpf::parse(line).map_err(|err| {
                    debug!(%err, "cpf rejected");
                    INVALID_CPF
                })
            },
        )?
        else {
            return Ok(Flow::Break(()));
        };
        let cpf_text = cpf.to_string();
        if registry.find_user(&cpf_text).is_some() {
            self.failure(&RegistryError::DuplicateCpf { cpf })?;
            return Ok(Flow::Continue(()));
        }

        let Some(name) = self.ask("Informe o nome completo: ")? else {
            return Ok(Flow::Break(()));
        };
        let Some(birth_date) = self.ask("Informe a data de nascimento (dd-mm-aaaa): ")? else {
            return Ok(Flow::Break(()));
        };
        if let Err(err) = parse_birth_date(&birth_date) {
            writeln!(self.output, "{err}")?;
            return Ok(Flow::Continue(()));
        }
        let Some(address) =
            self.ask("Informe o endereço (logradouro, nro - bairro - cidade/sigla estado): ")?
        else {
            return Ok(Flow::Break(()));
        };

        match registry.register_user(NewUser {
            cpf: &cpf_text,
            name: &name,
            birth_date: &birth_date,
            address: &address,
        }) {
            Ok(_) => writeln!(self.output, "=== Usuário criado com sucesso! ===")?,
            Err(err) => self.failure(&err)?,
        }
        Ok(Flow::Continue(()))
    }

    fn new_account(&mut self, registry: &mut impl Registry) -> Result<Flow> {
        let Some(cpf) = self.ask("Informe o CPF do usuário: ")? else {
            return Ok(Flow::Break(()));
        };
        match registry.open_account(&self.config.branch, &cpf) {
            Ok(_) => self.success("Conta criada com sucesso!")?,
            Err(err) => self.failure(&err)?,
        }
        Ok(Flow::Continue(()))
    }

    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        prompt(&mut self.input, self.output, message)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        if self.config.variant == Variant::Extended {
            writeln!(self.output, "\n=== {message} ===")?;
        }
        Ok(())
    }

    fn failure(&mut self, err: &RegistryError) -> Result<()> {
        match err {
            RegistryError::DuplicateCpf { .. } | RegistryError::UserNotFound => {
                writeln!(self.output, "\n@@@ {err} @@@")?
            }
            RegistryError::InvalidCpf(_) | RegistryError::InvalidBirthDate(_) => {
                writeln!(self.output, "{err}")?
            }
        }
        Ok(())
    }
}
