//! Decoding of the Open Library `jscmd=data` response into a [`BookSummary`].
//!
//! Every field of the book data is optional in the response and is decoded on its own, missing
//! fields fall back to a placeholder while fields of the wrong shape are an
//! [`ErrorKind::DecodeFailure`].
use log::trace;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{Map, Value};

use crate::{
    summary::{NO_AUTHOR, NO_TITLE, PLACEHOLDER_COVER_URL},
    BookSummary, Error, ErrorKind, Isbn,
};

type Object = Map<String, Value>;

#[derive(Deserialize)]
struct Author {
    name: String,
}

#[derive(Deserialize)]
struct Cover {
    medium: Option<String>,
}

/// Decodes the response `bytes` of a lookup for `isbn`.
///
/// # Errors
///
/// An [`ErrorKind::DecodeFailure`] error is returned when:
/// - `bytes` is not a JSON object,
/// - the object has no book data for `isbn`,
/// - a field of the book data is present but does not have the expected shape.
pub fn parse(bytes: &[u8], isbn: &Isbn) -> Result<BookSummary, Error> {
    let mut root: Object =
        serde_json::from_slice(bytes).map_err(|e| Error::wrap(ErrorKind::DecodeFailure, e))?;

    let key = isbn.bibkey();
    let book = match root.remove(&key) {
        Some(Value::Object(book)) => book,
        Some(_) => {
            return Err(Error::new(
                ErrorKind::DecodeFailure,
                format!("Value for key '{key}' is not an object"),
            ))
        }
        None => {
            return Err(Error::new(
                ErrorKind::DecodeFailure,
                format!("No book data for key '{key}'"),
            ))
        }
    };

    trace!("Found book data for '{key}'");

    Ok(BookSummary {
        title: decode_title(&book)?,
        authors: decode_authors(&book)?,
        cover_url: decode_cover_url(&book)?,
    })
}

fn decode_title(book: &Object) -> Result<String, Error> {
    Ok(field::<String>(book, "title")?.unwrap_or_else(|| NO_TITLE.to_owned()))
}

fn decode_authors(book: &Object) -> Result<Vec<String>, Error> {
    let authors = field::<Vec<Author>>(book, "authors")?.unwrap_or_default();

    if authors.is_empty() {
        Ok(vec![NO_AUTHOR.to_owned()])
    } else {
        Ok(authors.into_iter().map(|a| a.name).collect())
    }
}

fn decode_cover_url(book: &Object) -> Result<String, Error> {
    Ok(field::<Cover>(book, "cover")?
        .and_then(|c| c.medium)
        .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_owned()))
}

/// Decodes the field `name` of `book`, treating a missing field and `null` alike.
fn field<T: DeserializeOwned>(book: &Object, name: &str) -> Result<Option<T>, Error> {
    match book.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(|e| {
            Error::new(
                ErrorKind::DecodeFailure,
                format!("Field '{name}' has an unexpected shape: {e}"),
            )
        }),
    }
}
