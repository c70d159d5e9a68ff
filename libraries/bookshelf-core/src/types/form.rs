//! The add/edit buffer behind the book form

use crate::error::{BookshelfError, Result};
use crate::types::book::{Book, BookId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input of the book form.
///
/// Declaration order is the template order used for validation and for the
/// columns of the book table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Id,
    Title,
    Author,
    Genre,
    Price,
    PublishedYear,
    Stock,
}

impl FormField {
    /// Every field, in template order
    pub const ALL: [FormField; 7] = [
        FormField::Id,
        FormField::Title,
        FormField::Author,
        FormField::Genre,
        FormField::Price,
        FormField::PublishedYear,
        FormField::Stock,
    ];

    /// Wire name of the field, also used in validation messages
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Id => "id",
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Genre => "genre",
            FormField::Price => "price",
            FormField::PublishedYear => "publishedYear",
            FormField::Stock => "stock",
        }
    }

    /// Placeholder label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Genre => "Genre",
            FormField::Price => "Price",
            FormField::PublishedYear => "Published Year",
            FormField::Stock => "Stock",
        }
    }

    /// Whether the input only accepts numbers
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            FormField::Title | FormField::Author | FormField::Genre
        )
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = BookshelfError;

    /// Accepts the wire name case-insensitively, plus `published_year`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        FormField::ALL
            .into_iter()
            .find(|field| field.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| BookshelfError::UnknownField(s.to_string()))
    }
}

/// Text buffer backing the add/edit form.
///
/// Values are kept exactly as typed; nothing is parsed until the buffer is
/// turned into a [`Book`] with [`BookForm::to_book`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: String,
    pub published_year: String,
    pub stock: String,
}

impl BookForm {
    /// The empty template
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy a stored record into a buffer
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            price: book.price.to_string(),
            published_year: book.published_year.to_string(),
            stock: book.stock.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Genre => &self.genre,
            FormField::Price => &self.price,
            FormField::PublishedYear => &self.published_year,
            FormField::Stock => &self.stock,
        }
    }

    /// Overwrite one field. No validation happens here.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Id => &mut self.id,
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Genre => &mut self.genre,
            FormField::Price => &mut self.price,
            FormField::PublishedYear => &mut self.published_year,
            FormField::Stock => &mut self.stock,
        };
        *slot = value.into();
    }

    /// First field, in template order, that is empty or only whitespace
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_empty_template(&self) -> bool {
        *self == Self::empty()
    }

    /// Parse the buffer into a typed record.
    ///
    /// Fields are trimmed before parsing. The first field that fails to parse
    /// is reported as [`BookshelfError::InvalidField`].
    pub fn to_book(&self) -> Result<Book> {
        Ok(Book {
            id: parse_field::<BookId>(self, FormField::Id)?,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre.trim().to_string(),
            price: parse_field::<f64>(self, FormField::Price)?,
            published_year: parse_field::<i32>(self, FormField::PublishedYear)?,
            stock: parse_field::<i32>(self, FormField::Stock)?,
        })
    }
}

fn parse_field<T: FromStr>(form: &BookForm, field: FormField) -> Result<T> {
    let raw = form.get(field);
    raw.trim()
        .parse::<T>()
        .map_err(|_| BookshelfError::InvalidField {
            field: field.key().to_string(),
            value: raw.to_string(),
        })
}
