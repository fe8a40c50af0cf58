use log::{info, trace};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{parse, reachability::Reachability, BookSummary, Error, ErrorKind, Isbn};

use super::Client;

const OPEN_LIBRARY_URL: &str =
    "https://openlibrary.org/api/books?jscmd=data&format=json&bibkeys=ISBN:";

/// Characters of an ISBN that are written to the query string as is.
const ISBN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn lookup_url(isbn: &Isbn) -> String {
    let mut url = OPEN_LIBRARY_URL.to_owned();
    url.extend(utf8_percent_encode(isbn.as_str(), ISBN_ENCODE_SET));
    url
}

pub(crate) fn get_book_by_isbn<C: Client, R: Reachability>(
    isbn: &str,
    reachability: &R,
) -> Result<BookSummary, Error> {
    let isbn = Isbn::parse(isbn)?;
    get_book::<C, R>(&isbn, reachability)
}

pub(crate) fn get_book<C: Client, R: Reachability>(
    isbn: &Isbn,
    reachability: &R,
) -> Result<BookSummary, Error> {
    if !reachability.is_connected() {
        return Err(Error::new(
            ErrorKind::NoNetwork,
            "Network is unreachable - request not sent",
        ));
    }

    info!("Searching for ISBN '{isbn}' using Open Library API");
    let url = lookup_url(isbn);
    trace!("Requesting '{url}'");

    let client = C::default();
    let bytes = client.get_bytes(&url)?;

    trace!("Request was successful, {} bytes received", bytes.len());

    parse::parse(&bytes, isbn)
}

pub(crate) fn get_cover<C: Client>(cover_url: &str) -> Result<Vec<u8>, Error> {
    trace!("Requesting cover image '{cover_url}'");
    let client = C::default();
    let bytes = client.get_bytes(cover_url)?;

    if bytes.is_empty() {
        Err(Error::new(ErrorKind::Transport, "Cover image is empty"))
    } else {
        Ok(bytes)
    }
}
