use bookshelf::api::{CmdMessage, CmdResult, MessageLevel};
use bookshelf::model::{Book, Status};
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const AUTHOR_WIDTH: usize = 24;

pub fn print_result<W: Write>(out: &mut W, result: &CmdResult, json: bool) -> io::Result<()> {
    print_messages(out, &result.messages)?;
    if json {
        print_books_json(out, &result.listed_books)
    } else {
        print_books(out, &result.listed_books)
    }
}

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_books<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    let id_width = books
        .iter()
        .map(|b| b.id.to_string().len())
        .max()
        .unwrap_or(1);

    for book in books {
        let id = format!("{:>width$}.", book.id, width = id_width);
        let title = pad_to_width(&truncate_to_width(&book.title, TITLE_WIDTH), TITLE_WIDTH);
        let author = pad_to_width(&truncate_to_width(&book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);
        let status = match book.status {
            Status::Available => book.status.as_str().green(),
            Status::CheckedOut => book.status.as_str().yellow(),
        };
        writeln!(
            out,
            "  {} {} {} {:>5}  {}",
            id.bold(),
            title,
            author.dimmed(),
            book.year,
            status
        )?;
    }
    Ok(())
}

pub fn print_books_json<W: Write>(out: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        let json = book.to_json().map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
    }
    Ok(())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
