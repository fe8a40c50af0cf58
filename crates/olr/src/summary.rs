use std::fmt;

/// Title used when the response has no title.
pub const NO_TITLE: &str = "No title available";
/// Author used when the response has no authors.
pub const NO_AUTHOR: &str = "No author available";
/// Cover image used when the response has no medium sized cover.
pub const PLACEHOLDER_COVER_URL: &str = "https://openlibrary.org/images/icons/avatar_book.png";

/// The display ready result of a successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookSummary {
    /// Title of the book.
    pub title: String,
    /// Names of the authors in the order given by the API, never empty.
    pub authors: Vec<String>,
    /// URL of the medium sized cover image.
    pub cover_url: String,
}

impl Default for BookSummary {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_owned(),
            authors: vec![NO_AUTHOR.to_owned()],
            cover_url: PLACEHOLDER_COVER_URL.to_owned(),
        }
    }
}

impl BookSummary {
    /// Whether the cover is the placeholder image rather than the book's own cover.
    #[must_use]
    pub fn has_placeholder_cover(&self) -> bool {
        self.cover_url == PLACEHOLDER_COVER_URL
    }
}

impl fmt::Display for BookSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title : {}", self.title)?;
        for author in &self.authors {
            write!(f, "\nAuthor : {author}\n")?;
        }
        write!(f, "\nImage : {}", self.cover_url)
    }
}

#[cfg(test)]
mod tests {
    use super::BookSummary;

    #[test]
    fn display_lists_every_author() {
        let summary = BookSummary {
            title: "Good Omens".to_owned(),
            authors: vec!["Terry Pratchett".to_owned(), "Neil Gaiman".to_owned()],
            cover_url: "http://x/cover.jpg".to_owned(),
        };

        assert_eq!(
            "Title : Good Omens\n\nAuthor : Terry Pratchett\n\nAuthor : Neil Gaiman\n\nImage : http://x/cover.jpg",
            summary.to_string()
        );
        assert!(!summary.has_placeholder_cover());
    }

    #[test]
    fn default_uses_placeholders() {
        let summary = BookSummary::default();
        assert_eq!(vec![super::NO_AUTHOR.to_owned()], summary.authors);
        assert!(summary.has_placeholder_cover());
    }
}
