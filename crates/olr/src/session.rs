//! The state of the search screen and the two operations that change it.
//!
//! A [`SearchSession`] is owned by the presentation layer. [`SearchSession::perform_search`]
//! validates the ISBN on the caller's thread and hands the request to a worker thread, results
//! come back over a channel and are only applied to the [`Screen`] when the caller polls or waits
//! on the session. Each search and each clear starts a new generation, results belonging to an
//! older generation are dropped so a slow reply never overwrites a newer screen.
use std::{
    marker::PhantomData,
    sync::{
        mpsc::{self, Receiver, RecvTimeoutError, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{debug, trace, warn};

use crate::{
    api::{open_library, Client},
    reachability::{Reachability, TcpReachability},
    BookSummary, Error, ErrorKind, Isbn,
};

const WORKER_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// An error waiting to be shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    /// Kind of error that caused the alert.
    pub kind: ErrorKind,
    /// Description of the underlying error, useful for logging but not for the user.
    pub detail: String,
}

impl Alert {
    fn from_error(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            detail: err.to_string(),
        }
    }

    /// The message to show the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.alert_message()
    }
}

/// Everything the presentation layer shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screen {
    /// Summary of the book currently shown.
    pub summary: Option<BookSummary>,
    /// Text view contents, the rendered `summary`.
    pub text: String,
    /// Undecoded bytes of the cover image.
    pub cover: Option<Vec<u8>>,
    /// Error to show as an alert.
    pub alert: Option<Alert>,
}

/// Where the current search is up to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No request outstanding.
    Idle,
    /// Waiting for the book data.
    Searching,
    /// Book data shown, waiting for the cover image.
    LoadingCover,
}

enum Event {
    Summary(u64, Result<BookSummary, Error>),
    Cover(u64, Result<Vec<u8>, Error>),
}

/// View-model of the search screen, generic over the HTTP client and reachability check so both
/// can be replaced.
pub struct SearchSession<C = reqwest::blocking::Client, R = TcpReachability> {
    reachability: Arc<R>,
    screen: Screen,
    phase: Phase,
    generation: u64,
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    worker: Option<JoinHandle<()>>,
    #[cfg(test)]
    stale_dropped: usize,
    _client: PhantomData<fn() -> C>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(TcpReachability::default())
    }
}

impl<C, R> SearchSession<C, R>
where
    C: Client + 'static,
    R: Reachability + Send + Sync + 'static,
{
    /// Creates a session with an empty screen.
    pub fn new(reachability: R) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            reachability: Arc::new(reachability),
            screen: Screen::default(),
            phase: Phase::Idle,
            generation: 0,
            sender,
            receiver,
            worker: None,
            #[cfg(test)]
            stale_dropped: 0,
            _client: PhantomData,
        }
    }

    /// The current screen.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Where the current search is up to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a request is still outstanding for the current search.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Removes the alert from the screen, returning it so it can be shown.
    pub fn take_alert(&mut self) -> Option<Alert> {
        self.screen.alert.take()
    }

    /// Starts a search for `isbn`, superseding any search in flight.
    ///
    /// An invalid ISBN is reported as an alert straight away without any network activity,
    /// otherwise the lookup runs on a worker thread and its results are applied by
    /// [`SearchSession::poll`] or [`SearchSession::wait`].
    pub fn perform_search(&mut self, isbn: &str) {
        self.generation += 1;
        self.screen.alert = None;

        let isbn = match Isbn::parse(isbn) {
            Ok(isbn) => isbn,
            Err(err) => {
                debug!("{err}");
                self.screen.alert = Some(Alert::from_error(&err));
                self.phase = Phase::Idle;
                self.worker = None;
                return;
            }
        };

        trace!("Dispatching search {} for ISBN '{isbn}'", self.generation);
        self.phase = Phase::Searching;
        self.worker = Some(self.spawn_worker(isbn));
    }

    /// Empties the screen, results of a search in flight will not be shown.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.screen = Screen::default();
        self.phase = Phase::Idle;
        self.worker = None;
    }

    /// Applies every result that has arrived without blocking.
    ///
    /// Returns `true` when the screen changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.receiver.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Blocks until the current search has no request outstanding.
    pub fn wait(&mut self) {
        while self.is_busy() {
            match self.receiver.recv_timeout(WORKER_CHECK_INTERVAL) {
                Ok(event) => {
                    self.apply(event);
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {
                    self.check_worker();
                }
            }
        }
    }

    fn spawn_worker(&self, isbn: Isbn) -> JoinHandle<()> {
        let generation = self.generation;
        let sender = self.sender.clone();
        let reachability = Arc::clone(&self.reachability);

        thread::spawn(move || {
            let result = open_library::get_book::<C, R>(&isbn, &*reachability);
            let cover_url = result.as_ref().ok().map(|s| s.cover_url.clone());

            if sender.send(Event::Summary(generation, result)).is_err() {
                return;
            }

            if let Some(url) = cover_url {
                let cover = open_library::get_cover::<C>(&url);
                // a closed channel means the session is gone, nothing left to do
                let _ = sender.send(Event::Cover(generation, cover));
            }
        })
    }

    /// Stops waiting on a worker that ended without sending all of its results.
    fn check_worker(&mut self) {
        let finished = self.worker.as_ref().map_or(true, JoinHandle::is_finished);
        if !finished {
            return;
        }

        // results sent just before the worker finished
        self.poll();

        if self.is_busy() {
            warn!("Search {} stopped without a result", self.generation);
            self.screen.alert = Some(Alert {
                kind: ErrorKind::Transport,
                detail: "Search stopped without a result".to_owned(),
            });
            self.phase = Phase::Idle;
        }
    }

    fn apply(&mut self, event: Event) -> bool {
        match event {
            Event::Summary(generation, _) | Event::Cover(generation, _)
                if generation != self.generation =>
            {
                debug!("Dropping result of stale search {generation}");
                #[cfg(test)]
                {
                    self.stale_dropped += 1;
                }
                false
            }
            Event::Summary(_, Ok(summary)) => {
                self.screen.text = summary.to_string();
                self.screen.summary = Some(summary);
                self.screen.cover = None;
                self.phase = Phase::LoadingCover;
                true
            }
            Event::Summary(_, Err(err)) => {
                debug!("{err}");
                self.screen.alert = Some(Alert::from_error(&err));
                self.phase = Phase::Idle;
                true
            }
            Event::Cover(_, Ok(bytes)) => {
                trace!("Cover image loaded ({} bytes)", bytes.len());
                self.screen.cover = Some(bytes);
                self.phase = Phase::Idle;
                true
            }
            Event::Cover(_, Err(err)) => {
                warn!("Cover image not loaded: {err}");
                self.phase = Phase::Idle;
                false
            }
        }
    }
}
