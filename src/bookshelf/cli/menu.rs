//! The interactive menu.
//!
//! Reads one choice per line, prompts for the fields that choice needs, and
//! prints whatever the API returns. A failing action prints an error and the
//! loop carries on; only "Exit", end of input, or an I/O error on the
//! terminal itself leave it.

use super::print::{print_messages, print_result};
use bookshelf::api::{CmdMessage, CmdResult, ShelfApi};
use bookshelf::error::{CatalogError, Result};
use bookshelf::store::StorageBackend;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
Menu:
1. Add a book
2. Delete a book
3. Find books
4. List all books
5. Change book status
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Find,
    List,
    ChangeStatus,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Add),
            "2" => Ok(MenuChoice::Delete),
            "3" => Ok(MenuChoice::Find),
            "4" => Ok(MenuChoice::List),
            "5" => Ok(MenuChoice::ChangeStatus),
            "6" => Ok(MenuChoice::Exit),
            other => Err(CatalogError::Input(format!("Invalid choice '{}'", other))),
        }
    }
}

enum Flow {
    Continue(CmdResult),
    Quit,
}

pub struct Menu<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut ShelfApi<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Menu<'a, B, R, W> {
    pub fn new(api: &'a mut ShelfApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let line = match self.prompt("Choose an option: ") {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(CatalogError::Io(e)) => return Err(CatalogError::Io(e)),
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => choice,
                Err(_) => {
                    print_messages(
                        &mut self.output,
                        &[CmdMessage::warning("Invalid choice. Try again.")],
                    )?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue(result)) => print_result(&mut self.output, &result, false)?,
                Ok(Flow::Quit) => break,
                Err(CatalogError::Io(e)) => return Err(CatalogError::Io(e)),
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    fn report(&mut self, error: &CatalogError) -> Result<()> {
        print_messages(
            &mut self.output,
            &[CmdMessage::error(format!("Error: {}", error))],
        )?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => {
                let Some(title) = self.prompt("Title: ")? else {
                    return Ok(Flow::Quit);
                };
                let Some(author) = self.prompt("Author: ")? else {
                    return Ok(Flow::Quit);
                };
                let Some(year) = self.prompt("Publication year: ")? else {
                    return Ok(Flow::Quit);
                };
                let year = parse_number::<i32>("Year", &year)?;
                self.api.add_book(title, author, year).map(Flow::Continue)
            }
            MenuChoice::Delete => {
                let Some(id) = self.prompt("Id of the book to delete: ")? else {
                    return Ok(Flow::Quit);
                };
                let id = parse_number::<u32>("Id", &id)?;
                self.api.delete_book(id).map(Flow::Continue)
            }
            MenuChoice::Find => {
                let Some(field) = self.prompt("Field to search (title, author, year): ")? else {
                    return Ok(Flow::Quit);
                };
                let Some(value) = self.prompt("Value to search for: ")? else {
                    return Ok(Flow::Quit);
                };
                self.api.find_books(&field, &value).map(Flow::Continue)
            }
            MenuChoice::List => self.api.list_books().map(Flow::Continue),
            MenuChoice::ChangeStatus => {
                let Some(id) = self.prompt("Id of the book: ")? else {
                    return Ok(Flow::Quit);
                };
                let id = parse_number::<u32>("Id", &id)?;
                let Some(status) = self.prompt("New status (available, checked_out): ")? else {
                    return Ok(Flow::Quit);
                };
                self.api.change_status(id, &status).map(Flow::Continue)
            }
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    /// Print `label` and read one line. `None` at end of input.
    ///
    /// A line that is not UTF-8 is consumed and reported as bad input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8(bytes)
            .map_err(|_| CatalogError::Input("input is not valid UTF-8".to_string()))?;
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn parse_number<T: FromStr>(what: &str, text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| CatalogError::Input(format!("{} must be an integer, got '{}'", what, text)))
}
