use std::{fmt, str::FromStr};

use log::trace;

use crate::{Error, ErrorKind};

/// Fewest characters accepted as an ISBN (the length of an ISBN-10).
pub const MIN_ISBN_LEN: usize = 10;

/// An ISBN as typed by the user.
///
/// Only the length is checked, there is no checksum validation. The text is kept exactly as given
/// (hyphens included) as the API echoes it back as the key of the response object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Isbn(String);

impl Isbn {
    /// Validates `text` as an ISBN.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::InvalidIsbn`] error is returned when `text` is empty or shorter than
    /// [`MIN_ISBN_LEN`] characters.
    pub fn parse(text: &str) -> Result<Self, Error> {
        trace!("Validating ISBN '{text}'");
        let len = text.chars().count();
        if len == 0 {
            Err(Error::new(ErrorKind::InvalidIsbn, "ISBN is empty"))
        } else if len < MIN_ISBN_LEN {
            Err(Error::new(
                ErrorKind::InvalidIsbn,
                format!("'{text}' is shorter than {MIN_ISBN_LEN} characters"),
            ))
        } else {
            Ok(Self(text.to_owned()))
        }
    }

    /// The ISBN text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key of this ISBN in the `bibkeys` query and in the response object.
    #[must_use]
    pub fn bibkey(&self) -> String {
        format!("ISBN:{}", self.0)
    }
}

impl FromStr for Isbn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
