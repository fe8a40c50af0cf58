pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when looking up a book.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The ISBN given was empty or too short to be an ISBN.
    InvalidIsbn,
    /// The network is unreachable so no request was attempted.
    NoNetwork,
    /// The request was sent but failed before a usable response was received.
    Transport,
    /// The response could not be decoded into a book summary.
    DecodeFailure,
}

impl ErrorKind {
    /// The message shown to the user when a lookup fails with this kind of error.
    #[must_use]
    pub const fn alert_message(self) -> &'static str {
        match self {
            Self::InvalidIsbn => "Please provide a valid ISBN.",
            Self::NoNetwork => "No internet connection.",
            Self::Transport => "Error while contacting the server.",
            Self::DecodeFailure => "Error while parsing JSON.",
        }
    }
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Shortcut for [`ErrorKind::alert_message`] of this error's kind.
    #[must_use]
    pub const fn alert_message(&self) -> &'static str {
        self.kind.alert_message()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::InvalidIsbn => f.write_str("Invalid ISBN")?,
            ErrorKind::NoNetwork => f.write_str("No network")?,
            ErrorKind::Transport => f.write_str("Transport error")?,
            ErrorKind::DecodeFailure => f.write_str("Decode error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
