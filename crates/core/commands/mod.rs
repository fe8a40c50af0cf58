use std::path::PathBuf;

use crate::{app, file, interact};

use olr::SearchSession;

use clap::Subcommand;
use eyre::eyre;
use log::{trace, warn};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search for a book by ISBN
    #[clap(arg_required_else_help = true)]
    Search {
        /// The ISBN to search for, hyphens are allowed
        isbn: String,

        /// Write the cover image of the book to this file
        #[clap(short, long, parse(from_os_str))]
        cover: Option<PathBuf>,
    },

    /// Search for books one ISBN after another
    ///
    /// Enter `clear` to clear the last result and an empty line or `quit` to exit.
    Interact,
}

impl Commands {
    pub fn execute(self, quiet: bool) -> eyre::Result<()> {
        match self {
            Commands::Search { isbn, cover } => {
                let mut session: SearchSession = SearchSession::default();
                session.perform_search(&isbn);
                session.wait();

                if let Some(alert) = session.take_alert() {
                    return Err(eyre!(app::alert_text(&alert)));
                }

                if !quiet {
                    app::render(session.screen());
                }

                if let Some(path) = cover {
                    trace!("'cover' option used with value of '{}'", path.display());
                    match &session.screen().cover {
                        Some(bytes) => file::write_cover(&path, bytes)?,
                        None => warn!("No cover image was loaded - nothing written"),
                    }
                }
                Ok(())
            }
            Commands::Interact => interact::run(SearchSession::default()),
        }
    }
}
