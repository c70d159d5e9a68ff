//! Text rendering of the book management screen.
//!
//! `render` is a pure function of [`ViewState`].

use crate::state::ViewState;
use bookshelf_core::{Book, BookForm, FormField, Message};
use std::fmt::Write;

pub const TITLE: &str = "Book Management System";
pub const EMPTY_LIST: &str = "No books found.";

const ACTIONS_HEADER: &str = "Actions";

/// Render the whole screen.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(message) = &state.message {
        out.push_str(&banner(message));
        out.push_str("\n\n");
    }

    out.push_str(TITLE);
    out.push_str("\n\n");

    render_form(&mut out, state);
    out.push('\n');
    render_lookup(&mut out, state);
    out.push('\n');
    render_table(&mut out, &state.books);

    out
}

/// Banner line, styled by the message tag.
pub fn banner(message: &Message) -> String {
    match message {
        Message::Success(text) => format!("[OK] {}", text),
        Message::Failure(text) => format!("[ERROR] {}", text),
    }
}

fn render_form(out: &mut String, state: &ViewState) {
    let _ = writeln!(out, "== {} ==", state.form_title());

    let label_width = FormField::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    for field in FormField::ALL {
        let _ = writeln!(
            out,
            "  {:<width$} ({}): {}",
            field.label(),
            field.key(),
            state.book.get(field),
            width = label_width
        );
    }

    if state.edit_mode {
        out.push_str("  [update] Update Book   [cancel] Cancel\n");
    } else {
        out.push_str("  [add] Add Book\n");
    }
}

fn render_lookup(out: &mut String, state: &ViewState) {
    out.push_str("== Get Book By ID ==\n");
    let _ = writeln!(out, "  ID: {}   [lookup <id>] Fetch", state.id_to_fetch);

    if let Some(book) = &state.fetched_book {
        out.push_str("Book Found:\n");
        out.push_str(&book.to_pretty_json());
        out.push('\n');
    }
}

fn render_table(out: &mut String, books: &[Book]) {
    out.push_str("== All Books ==\n");

    if books.is_empty() {
        out.push_str(EMPTY_LIST);
        out.push('\n');
        return;
    }

    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|book| {
            let form = BookForm::from_book(book);
            let mut row: Vec<String> = FormField::ALL
                .iter()
                .map(|field| form.get(*field).to_string())
                .collect();
            row.push(format!("edit {id} | delete {id}", id = book.id));
            row
        })
        .collect();

    let header: Vec<&str> = FormField::ALL
        .iter()
        .map(|field| field.key())
        .chain(std::iter::once(ACTIONS_HEADER))
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(column, title)| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(title.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    write_row(out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        write_row(out, row.iter().map(String::as_str), &widths);
    }
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}
