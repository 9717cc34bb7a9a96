use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::application::{AppError, BankService};
use crate::domain::{
    DEFAULT_WITHDRAWAL_CAP, DEFAULT_WITHDRAWAL_LIMIT, Statement, format_brl, format_cents,
    parse_cents,
};

/// Minibanco - interactive terminal bank
#[derive(Parser)]
#[command(name = "minibanco")]
#[command(about = "An interactive toy bank: clients, accounts and statements")]
#[command(version)]
pub struct Cli {
    /// Maximum amount allowed in a single withdrawal (e.g. "500.00")
    #[arg(long, default_value_t = format_cents(DEFAULT_WITHDRAWAL_CAP))]
    pub withdrawal_cap: String,

    /// Maximum number of withdrawals over an account's lifetime
    #[arg(long, default_value_t = DEFAULT_WITHDRAWAL_LIMIT)]
    pub withdrawal_limit: u32,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cap = parse_cents(&self.withdrawal_cap)
            .context("Invalid withdrawal cap. Use '500.00' or '500'")?;
        let mut service = BankService::new(cap, self.withdrawal_limit);

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_loop(&mut service, &mut stdin.lock(), &mut stdout.lock())?;
        Ok(())
    }
}

const MENU: &str = "\n========== MENU ==========\n\
                    1. Novo cliente\n\
                    2. Nova conta\n\
                    3. Listar contas\n\
                    4. Filtrar clientes\n\
                    5. Depositar\n\
                    6. Sacar\n\
                    7. Extrato\n\
                    8. Sair";

const BIRTH_DATE_INPUT: &str = "%d-%m-%Y";
const DATE_DISPLAY: &str = "%d/%m/%Y";
const TIMESTAMP_DISPLAY: &str = "%d/%m/%Y %H:%M:%S";

/// The read-dispatch-print loop. One state: print the menu, read a
/// choice, dispatch, print the outcome, repeat. Exits on choice 8 or end
/// of input. Every business or parse failure is printed and control
/// returns to the menu; no input terminates the loop early.
///
/// Generic over reader/writer so tests can script whole sessions.
pub fn run_loop<R: BufRead, W: Write>(
    service: &mut BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Selecione uma opção: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => create_client(service, input, output)?,
            "2" => open_account(service, input, output)?,
            "3" => list_accounts(service, output)?,
            "4" => filter_clients(service, input, output)?,
            "5" => deposit(service, input, output)?,
            "6" => withdraw(service, input, output)?,
            "7" => show_statement(service, input, output)?,
            "8" => {
                writeln!(output, "Saindo do sistema...")?;
                break;
            }
            _ => writeln!(output, "Opção inválida! Tente novamente.")?,
        }
    }
    Ok(())
}

/// Print a label and read one trimmed line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_birth_date(input: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(input, BIRTH_DATE_INPUT).map_err(|_| AppError::InvalidDate)
}

fn create_client<R: BufRead, W: Write>(
    service: &mut BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(cpf) = prompt(input, output, "Informe o CPF (somente números): ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, output, "Informe o nome completo: ")? else {
        return Ok(());
    };
    let Some(birth) = prompt(input, output, "Informe a data de nascimento (dd-mm-aaaa): ")? else {
        return Ok(());
    };
    let Some(address) = prompt(
        input,
        output,
        "Informe o endereço (logradouro, nro - bairro - cidade/sigla estado): ",
    )?
    else {
        return Ok(());
    };

    let result = parse_birth_date(&birth)
        .and_then(|birth_date| service.create_client(cpf, name, birth_date, address));

    match result {
        Ok(()) => writeln!(output, "\nCliente criado com sucesso!"),
        Err(e) => writeln!(output, "\n{e}"),
    }
}

fn open_account<R: BufRead, W: Write>(
    service: &mut BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(cpf) = prompt(input, output, "Informe o CPF do cliente (somente números): ")? else {
        return Ok(());
    };

    match service.open_account(&cpf) {
        Ok(summary) => {
            writeln!(output, "\nConta criada com sucesso!")?;
            writeln!(output, "Agência:\t{}", summary.branch)?;
            writeln!(output, "C/C:\t\t{}", summary.number)?;
            writeln!(output, "Titular:\t{}", summary.holder)
        }
        Err(e) => writeln!(output, "\n{e}"),
    }
}

fn list_accounts<W: Write>(service: &BankService, output: &mut W) -> io::Result<()> {
    let rows = service.list_accounts();
    if rows.is_empty() {
        return writeln!(output, "\nNenhuma conta cadastrada!");
    }

    writeln!(output, "\n========== CONTAS ==========")?;
    for row in rows {
        writeln!(output, "Agência:\t{}", row.branch)?;
        writeln!(output, "C/C:\t\t{}", row.number)?;
        writeln!(output, "Titular:\t{}", row.holder)?;
        writeln!(output, "{}", "=".repeat(30))?;
    }
    Ok(())
}

fn filter_clients<R: BufRead, W: Write>(
    service: &BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(pattern) = prompt(input, output, "Informe o nome para filtrar clientes: ")? else {
        return Ok(());
    };

    let matches = service.filter_clients(&pattern);
    if matches.is_empty() {
        return writeln!(output, "\nNenhum cliente encontrado.");
    }

    for client in matches {
        writeln!(output, "\nNome: {}", client.name)?;
        writeln!(output, "CPF: {}", client.cpf)?;
        writeln!(
            output,
            "Data de Nascimento: {}",
            client.birth_date.format(DATE_DISPLAY)
        )?;
    }
    Ok(())
}

fn deposit<R: BufRead, W: Write>(
    service: &mut BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(cpf) = prompt(input, output, "Informe o CPF do cliente (somente números): ")? else {
        return Ok(());
    };
    let Some(value) = prompt(input, output, "Informe o valor do depósito: R$ ")? else {
        return Ok(());
    };

    let result = parse_cents(&value)
        .map_err(AppError::from)
        .and_then(|amount| service.deposit(&cpf, amount).map(|_| amount));

    match result {
        Ok(amount) => writeln!(
            output,
            "\nDepósito de {} realizado com sucesso!",
            format_brl(amount)
        ),
        Err(e) => writeln!(output, "\n{e}"),
    }
}

fn withdraw<R: BufRead, W: Write>(
    service: &mut BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(cpf) = prompt(input, output, "Informe o CPF do cliente (somente números): ")? else {
        return Ok(());
    };
    let Some(value) = prompt(input, output, "Informe o valor do saque: R$ ")? else {
        return Ok(());
    };

    let result = parse_cents(&value)
        .map_err(AppError::from)
        .and_then(|amount| service.withdraw(&cpf, amount).map(|_| amount));

    match result {
        Ok(amount) => writeln!(
            output,
            "\nSaque de {} realizado com sucesso!",
            format_brl(amount)
        ),
        Err(e) => writeln!(output, "\n{e}"),
    }
}

fn show_statement<R: BufRead, W: Write>(
    service: &BankService,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(cpf) = prompt(input, output, "Informe o CPF do cliente (somente números): ")? else {
        return Ok(());
    };

    match service.statement(&cpf) {
        Ok(statement) => print_statement(output, &statement),
        Err(e) => writeln!(output, "\n{e}"),
    }
}

fn print_statement<W: Write>(output: &mut W, statement: &Statement) -> io::Result<()> {
    writeln!(output, "\n========== EXTRATO ==========")?;
    if !statement.has_movements() {
        writeln!(output, "Não foram realizadas movimentações.")?;
    }
    for entry in &statement.entries {
        writeln!(output, "{}:", entry.kind)?;
        writeln!(output, "\t{}", format_brl(entry.amount_cents))?;
        writeln!(
            output,
            "\tData: {}",
            entry.registered_at.format(TIMESTAMP_DISPLAY)
        )?;
    }
    writeln!(output, "\nSaldo: {}", format_brl(statement.balance_cents))?;
    writeln!(output, "{}", "=".repeat(30))
}
