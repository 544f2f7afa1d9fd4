use super::print::{print_messages, print_quotes};
use super::report;
use colored::Colorize;
use quotez::api::{CmdMessage, QuoteUpdate, QuotezApi};
use quotez::command::Command;
use quotez::error::{QuotezError, Result};
use quotez::store::StorageBackend;
use std::io::{self, BufRead, Write};

/// Read commands until `exit` or end of input.
///
/// Malformed lines and rejected input are reported and the loop goes on;
/// storage failures end the shell.
pub(super) fn run<B: StorageBackend, R: BufRead>(api: &QuotezApi<B>, input: R) -> Result<()> {
    let mut lines = input.lines();
    println!("{}", "== Quotes ==".bold());

    loop {
        let Some(line) = prompt(&mut lines, "command) ")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<Command>() {
            Ok(Command::Exit) => break,
            Ok(command) => dispatch(api, command, &mut lines),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(e @ (QuotezError::Command(_) | QuotezError::Api(_))) => {
                print_messages(&[CmdMessage::error(e.to_string())]);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Run one command. Returns false when input ran out mid-command.
fn dispatch<B: StorageBackend, L>(
    api: &QuotezApi<B>,
    command: Command,
    lines: &mut L,
) -> Result<bool>
where
    L: Iterator<Item = io::Result<String>>,
{
    let result = match command {
        Command::Add => {
            let Some(content) = prompt(lines, "Quote : ")? else {
                return Ok(false);
            };
            let Some(author) = prompt(lines, "Author : ")? else {
                return Ok(false);
            };
            api.add_quote(content, author)?
        }
        Command::List { page } => api.list_quotes(page)?,
        Command::Show { id } => {
            let result = api.view_quote(id)?;
            print_quotes(&result.affected_quotes);
            result
        }
        Command::Modify { id } => {
            let current = api.view_quote(id)?;
            let Some(quote) = current.affected_quotes.first() else {
                print_messages(&current.messages);
                return Ok(true);
            };

            println!("Quote (current) : {}", quote.content);
            let Some(content) = prompt(lines, "Quote : ")? else {
                return Ok(false);
            };
            println!("Author (current) : {}", quote.author);
            let Some(author) = prompt(lines, "Author : ")? else {
                return Ok(false);
            };

            // Blank answers keep the current value
            let update = QuoteUpdate::new(non_blank(content), non_blank(author));
            api.modify_quote(id, update)?
        }
        Command::Delete { id } => api.delete_quote(id)?,
        Command::Build => api.build()?,
        Command::Sample { count } => api.make_sample_data(count)?,
        Command::Exit => return Ok(false),
    };

    report(&result);
    Ok(true)
}

fn prompt<L>(lines: &mut L, label: &str) -> Result<Option<String>>
where
    L: Iterator<Item = io::Result<String>>,
{
    print!("{}", label);
    let _ = io::stdout().flush();

    match lines.next() {
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => Err(QuotezError::storage("read", "<stdin>", e)),
        None => {
            println!();
            Ok(None)
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
