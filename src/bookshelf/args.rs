use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Keep track of your books from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (default: $BOOKSHELF_FILE, the configured file, or ./books.json)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (the default)
    Menu,

    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,

        author: String,

        /// Publication year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Delete a book by id
    #[command(alias = "rm")]
    Delete { id: u32 },

    /// Find books where a field equals a value (case-insensitive)
    #[command(alias = "f")]
    Find {
        /// One of: id, title, author, year, status
        field: String,

        value: String,

        /// Print books as JSON objects
        #[arg(long)]
        json: bool,
    },

    /// List every book
    #[command(alias = "ls")]
    List {
        /// Print books as JSON objects
        #[arg(long)]
        json: bool,
    },

    /// Set a book's status (available, checked_out)
    Status { id: u32, status: String },
}
