#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # olr
//!
//! olr looks up books on the [Open Library](https://openlibrary.org) by ISBN and returns a
//! [`BookSummary`] of the title, authors and cover image of the book.
//!
//! Missing fields in the response are replaced with placeholders rather than failing the lookup,
//! see [`parse`]. For a screen that searches in the background use [`SearchSession`].

mod api;
mod error;
mod isbn;
pub mod parse;
pub mod reachability;
mod session;
mod summary;

pub use api::Client;
pub use error::{Error, ErrorKind};
pub use isbn::{Isbn, MIN_ISBN_LEN};
pub use parse::parse;
pub use session::{Alert, Phase, Screen, SearchSession};
pub use summary::{BookSummary, NO_AUTHOR, NO_TITLE, PLACEHOLDER_COVER_URL};

use log::trace;
use reachability::{Reachability, TcpReachability};

type DefaultClient = reqwest::blocking::Client;

/// Look up the book with `isbn` using the Open Library API.
///
/// The network is checked with the default [`TcpReachability`] before any request is sent.
///
/// # Errors
///
/// An [`ErrorKind::InvalidIsbn`] error is returned when `isbn` is empty or too short.
/// An [`ErrorKind::NoNetwork`] error is returned when the network is unreachable.
/// An [`ErrorKind::Transport`] error is returned when the request fails.
/// An [`ErrorKind::DecodeFailure`] error is returned when the response has no usable book data.
#[inline]
pub fn book_by_isbn(isbn: &str) -> Result<BookSummary, Error> {
    book_by_isbn_with(isbn, &TcpReachability::default())
}

/// Look up the book with `isbn`, checking the network with `reachability`.
///
/// # Errors
///
/// See [`book_by_isbn`].
#[inline]
pub fn book_by_isbn_with<R: Reachability>(
    isbn: &str,
    reachability: &R,
) -> Result<BookSummary, Error> {
    trace!("Search book by ISBN of '{isbn}'");
    api::open_library::get_book_by_isbn::<DefaultClient, R>(isbn, reachability)
}

/// Fetch the undecoded bytes of the cover image at `url`.
///
/// # Errors
///
/// An [`ErrorKind::Transport`] error is returned when the request fails or the image is empty.
#[inline]
pub fn cover_by_url(url: &str) -> Result<Vec<u8>, Error> {
    trace!("Fetch cover image at url of '{url}'");
    api::open_library::get_cover::<DefaultClient>(url)
}

#[cfg(test)]
mod tests {
    use crate::{
        reachability::{Offline, Online},
        ErrorKind,
    };

    #[test]
    fn short_isbn_is_invalid_before_reachability() {
        let err = super::book_by_isbn_with("123", &Online).expect_err("ISBN is too short");
        assert_eq!(ErrorKind::InvalidIsbn, err.kind());

        let err = super::book_by_isbn_with("", &Offline).expect_err("ISBN is empty");
        assert_eq!(ErrorKind::InvalidIsbn, err.kind());
    }

    #[test]
    fn offline_lookup_is_no_network() {
        let err = super::book_by_isbn_with("9780140449136", &Offline).expect_err("Offline");
        assert_eq!(ErrorKind::NoNetwork, err.kind());
        assert_eq!("No internet connection.", err.alert_message());
    }

    #[test]
    fn cover_with_invalid_url_is_transport_error() {
        // fails while building the request so no connection is made
        let err = super::cover_by_url("not a url").expect_err("URL has no scheme");
        assert_eq!(ErrorKind::Transport, err.kind());
    }
}
