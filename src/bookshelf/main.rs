use bookshelf::api::{CmdResult, ShelfApi};
use bookshelf::config::{self, ShelfConfig, FILE_ENV, HOME_ENV};
use bookshelf::error::Result;
use bookshelf::store::fs::FileBackend;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::menu::Menu;
use cli::print::{print_messages, print_result};

const LOG_ENV: &str = "BOOKSHELF_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so they never mix with menu output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "error" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Returns `Ok(false)` when a one-shot command reported an error.
fn run(cli: Cli) -> Result<bool> {
    let config_dir = config::config_dir(env_path(HOME_ENV))?;
    let config = ShelfConfig::load(&config_dir)?;
    let path = config.catalog_path(cli.file, env_path(FILE_ENV));
    tracing::debug!(path = %path.display(), config = %config_dir.display(), "starting");

    let backend = FileBackend::new(&path).with_pretty(config.pretty);
    let (mut api, loaded) = ShelfApi::open(backend);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (result, json) = match cli.command {
        None | Some(Commands::Menu) => {
            print_messages(&mut out, &loaded.messages)?;
            let stdin = io::stdin();
            Menu::new(&mut api, stdin.lock(), &mut out).run()?;
            return Ok(true);
        }
        Some(Commands::Add {
            title,
            author,
            year,
        }) => (api.add_book(title, author, year)?, false),
        Some(Commands::Delete { id }) => (api.delete_book(id)?, false),
        Some(Commands::Find { field, value, json }) => (api.find_books(&field, &value)?, json),
        Some(Commands::List { json }) => (api.list_books()?, json),
        Some(Commands::Status { id, status }) => (api.change_status(id, &status)?, false),
    };

    // One-shot commands stay quiet about a clean load.
    if loaded.has_errors() {
        print_messages(&mut io::stderr(), &loaded.messages)?;
    }
    print_one_shot(&mut out, &result, json)?;
    Ok(!result.has_errors())
}

fn print_one_shot<W: io::Write>(out: &mut W, result: &CmdResult, json: bool) -> io::Result<()> {
    if json {
        // Keep stdout machine-readable.
        print_messages(&mut io::stderr(), &result.messages)?;
        cli::print::print_books_json(out, &result.listed_books)
    } else {
        print_result(out, result, false)
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
