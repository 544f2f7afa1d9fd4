//! # CLI Layer
//!
//! This module is **one possible UI client** for quotez. It is the only place
//! in the codebase that knows about stdout/stderr, argument parsing and
//! logging setup.
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `shell.rs`: interactive `action?key=value` loop over stdin
//! - `print.rs`: output formatting
//! - `run()`: logging, context setup and dispatch (called by `main.rs`)

mod print;
mod setup;
mod shell;

use clap::Parser;
use print::{print_messages, print_page, print_quotes};
use quotez::api::{CmdResult, QuoteUpdate, QuotezApi};
use quotez::error::Result;
use quotez::init::{initialize, resolve_home};
use quotez::store::FsBackend;
use setup::{Cli, Commands};
use tracing_subscriber::{fmt, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let home = resolve_home(cli.home.as_deref())?;
    let ctx = initialize(&home)?;
    let api = ctx.api;

    match cli.command {
        Some(Commands::Add { content, author }) => handle_add(&api, content, author),
        Some(Commands::List { page }) => handle_list(&api, page),
        Some(Commands::Show { id }) => handle_show(&api, id),
        Some(Commands::Modify {
            id,
            content,
            author,
        }) => handle_modify(&api, id, content, author),
        Some(Commands::Delete { id }) => handle_delete(&api, id),
        Some(Commands::Build) => handle_build(&api),
        Some(Commands::Sample { count }) => handle_sample(&api, count),
        Some(Commands::Shell) => shell::run(&api, std::io::stdin().lock()),
        None => handle_list(&api, None),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "warn,quotez=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

fn report(result: &CmdResult) {
    if let Some(listed) = &result.listed_page {
        print_page(listed);
    }
    print_messages(&result.messages);
}

fn handle_add(api: &QuotezApi<FsBackend>, content: String, author: String) -> Result<()> {
    let result = api.add_quote(content, author)?;
    report(&result);
    Ok(())
}

fn handle_list(api: &QuotezApi<FsBackend>, page: Option<usize>) -> Result<()> {
    let result = api.list_quotes(page)?;
    report(&result);
    Ok(())
}

fn handle_show(api: &QuotezApi<FsBackend>, id: u64) -> Result<()> {
    let result = api.view_quote(id)?;
    print_quotes(&result.affected_quotes);
    report(&result);
    Ok(())
}

fn handle_modify(
    api: &QuotezApi<FsBackend>,
    id: u64,
    content: Option<String>,
    author: Option<String>,
) -> Result<()> {
    let result = api.modify_quote(id, QuoteUpdate::new(content, author))?;
    report(&result);
    Ok(())
}

fn handle_delete(api: &QuotezApi<FsBackend>, id: u64) -> Result<()> {
    let result = api.delete_quote(id)?;
    report(&result);
    Ok(())
}

fn handle_build(api: &QuotezApi<FsBackend>) -> Result<()> {
    let result = api.build()?;
    report(&result);
    Ok(())
}

fn handle_sample(api: &QuotezApi<FsBackend>, count: usize) -> Result<()> {
    let result = api.make_sample_data(count)?;
    report(&result);
    Ok(())
}
