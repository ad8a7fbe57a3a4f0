use std::{fmt, io::Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{config::Variant, ledger::Statement, registry::Account};

const BASIC_MENU: &str = "
[d] Depositar
[s] Sacar
[e] Extrato
[q] Sair

=> ";

const EXTENDED_MENU: &str = "

================ MENU ================
[d]\tDepositar
[s]\tSacar
[e]\tExtrato
[nc]\tNova conta
[lc]\tListar contas
[nu]\tNovo usuário
[q]\tSair
=> ";

const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn menu(variant: Variant) -> &'static str {
    match variant {
        Variant::Basic => BASIC_MENU,
        Variant::Extended => EXTENDED_MENU,
    }
}

pub fn money(amount: Decimal) -> String {
    format!("R$ {amount:.2}")
}

/// Plain listing for the basic shell, table for the extended one.
pub fn print_statement<W>(
    output: &mut W,
    statement: Statement<'_>,
    variant: Variant,
    today: NaiveDate,
) -> Result<()>
where
    W: Write,
{
    match variant {
        Variant::Basic => print_plain_statement(output, statement),
        Variant::Extended => {
            let mut table = Table::new(["Data", "Descrição", "Valor"]);
            for tx in statement.transactions {
                table.add_row([
                    tx.timestamp.format(DATE_FORMAT).to_string(),
                    tx.kind.label().to_owned(),
                    money(tx.amount),
                ]);
            }
            table.add_row([
                today.format(DATE_FORMAT).to_string(),
                "Saldo".to_owned(),
                money(statement.balance),
            ]);
            write!(output, "{table}").context("Failed to write statement")
        }
    }
}

fn print_plain_statement<W>(output: &mut W, statement: Statement<'_>) -> Result<()>
where
    W: Write,
{
    writeln!(output, "\n================ EXTRATO ================")?;
    if statement.transactions.is_empty() {
        writeln!(output, "Não foram realizadas movimentações.")?;
    }
    for tx in statement.transactions {
        writeln!(output, "{}: {}", tx.kind.label(), money(tx.amount))?;
    }
    writeln!(output, "\nSaldo: {}", money(statement.balance))?;
    writeln!(output, "==========================================")?;
    Ok(())
}

pub fn print_accounts<W>(output: &mut W, accounts: &[Account]) -> Result<()>
where
    W: Write,
{
    for account in accounts {
        writeln!(output, "{}", "=".repeat(100))?;
        writeln!(output, "Agência:\t{}", account.branch)?;
        writeln!(output, "C/C:\t\t{}", account.number)?;
        writeln!(output, "Titular:\t{}", account.holder.name)?;
        writeln!(output)?;
    }
    Ok(())
}

/// Bordered three column table with centered cells.
struct Table {
    header: [String; 3],
    rows: Vec<[String; 3]>,
}

impl Table {
    fn new(header: [&str; 3]) -> Self {
        Self {
            header: header.map(str::to_owned),
            rows: Vec::new(),
        }
    }

    fn add_row(&mut self, row: [String; 3]) {
        self.rows.push(row);
    }

    fn widths(&self) -> [usize; 3] {
        let mut widths = self.header.each_ref().map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let border = |f: &mut fmt::Formatter<'_>| {
            for width in widths {
                write!(f, "+{}", "-".repeat(width + 2))?;
            }
            writeln!(f, "+")
        };
        let line = |f: &mut fmt::Formatter<'_>, cells: &[String; 3]| {
            for (cell, width) in cells.iter().zip(widths) {
                write!(f, "| {cell:^width$} ")?;
            }
            writeln!(f, "|")
        };

        border(f)?;
        line(f, &self.header)?;
        border(f)?;
        for row in &self.rows {
            line(f, row)?;
        }
        border(f)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{rc::Rc, str::from_utf8};

    use chrono::NaiveDateTime;

    use crate::{
        ledger::{Transaction, TransactionKind},
        registry::User,
    };

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn noon(d: u32) -> NaiveDateTime {
        day(d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction {
                timestamp: noon(1),
                kind: TransactionKind::Deposit,
                amount: Decimal::from(100),
            },
            Transaction {
                timestamp: noon(2),
                kind: TransactionKind::Withdrawal,
                amount: Decimal::new(505, 1),
            },
        ]
    }

    #[test]
    fn plain_statement() {
        let log = sample();
        let mut output = Vec::new();
        print_statement(
            &mut output,
            Statement {
                transactions: &log,
                balance: Decimal::new(495, 1),
            },
            Variant::Basic,
            day(3),
        )
        .unwrap();
        assert_eq!(
            from_utf8(&output).unwrap(),
            "\n================ EXTRATO ================\n\
             Depósito: R$ 100.00\n\
             Saque: R$ 50.50\n\
             \n\
             Saldo: R$ 49.50\n\
             ==========================================\n"
        );
    }

    #[test]
    fn plain_statement_without_movements() {
        let mut output = Vec::new();
        print_statement(
            &mut output,
            Statement {
                transactions: &[],
                balance: Decimal::ZERO,
            },
            Variant::Basic,
            day(3),
        )
        .unwrap();
        let text = from_utf8(&output).unwrap();
        assert!(text.contains("Não foram realizadas movimentações.\n"));
        assert!(text.contains("Saldo: R$ 0.00\n"));
    }

    #[test]
    fn table_statement() {
        let log = sample();
        let mut output = Vec::new();
        print_statement(
            &mut output,
            Statement {
                transactions: &log,
                balance: Decimal::new(495, 1),
            },
            Variant::Extended,
            day(3),
        )
        .unwrap();
        let lines: Vec<_> = from_utf8(&output).unwrap().lines().collect();
        assert_eq!(
            lines,
            [
                "+------------+-----------+-----------+",
                "|    Data    | Descrição |   Valor   |",
                "+------------+-----------+-----------+",
                "| 01/07/2024 | Depósito  | R$ 100.00 |",
                "| 02/07/2024 |   Saque   | R$ 50.50  |",
                "| 03/07/2024 |   Saldo   | R$ 49.50  |",
                "+------------+-----------+-----------+",
            ]
        );
    }

    #[test]
    fn list_accounts() {
        let holder = Rc::new(User {
            name: "Maria da Silva".to_owned(),
            birth_date: day(1),
            cpf: "52998224725".parse().unwrap(),
            address: "Rua A, 10".to_owned(),
        });
        let accounts = [1, 2].map(|number| Account {
            branch: "0001".to_owned(),
            number,
            holder: Rc::clone(&holder),
        });
        let mut output = Vec::new();
        print_accounts(&mut output, &accounts).unwrap();
        let separator = "=".repeat(100);
        assert_eq!(
            from_utf8(&output).unwrap(),
            format!(
                "{separator}\nAgência:\t0001\nC/C:\t\t1\nTitular:\tMaria da Silva\n\n\
                 {separator}\nAgência:\t0001\nC/C:\t\t2\nTitular:\tMaria da Silva\n\n"
            )
        );
    }
}
