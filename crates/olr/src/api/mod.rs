pub(crate) mod open_library;

use log::trace;

use crate::{Error, ErrorKind};

/// Blocking HTTP transport used for both the book data and cover image requests.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and returns the body of a successful response.
    ///
    /// # Errors
    ///
    /// An [`ErrorKind::Transport`] error is returned when the request cannot be sent, the response
    /// status is not a success or the body cannot be read.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let resp = self
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))?;

        trace!("Response status was {}", resp.status());

        resp.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| Error::wrap(ErrorKind::Transport, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_bytes_producer, MockClient, NetworkErrorProducer, Producer, URL_SINK,
};

#[cfg(test)]
mod test {

    use super::*;

    thread_local! {
        pub(crate) static URL_SINK: std::cell::RefCell<Option<String>> = std::cell::RefCell::new(None);
    }

    /// Asserts that the expected URL is the last one provided to a [`MockClient`] on this thread.
    ///
    /// The [`MockClient`] will update the static thread local `URL_SINK` with the URL string that
    /// was passed to it. When no request was made the sink is empty and the URL compared is `""`.
    macro_rules! assert_url {
        ($expected: expr) => {
            assert_url!($expected, "");
        };
        ($expected: expr, $($arg: tt)+) => {
            let url = crate::api::URL_SINK.with(|url| url.borrow().clone().unwrap_or_default());
            assert_eq!($expected, url, $($arg)+);
        };
    }

    pub(crate) trait Producer
    where
        Self: Default,
    {
        fn produce(url: &str) -> Result<Vec<u8>, Error>;
    }

    #[derive(Default)]
    pub(crate) struct MockClient<P: Producer = EmptyBodyProducer> {
        _producer: std::marker::PhantomData<P>,
    }

    impl<P: Producer> Client for MockClient<P> {
        fn get_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
            URL_SINK.with(|sink| *sink.borrow_mut() = Some(url.to_owned()));
            P::produce(url)
        }
    }

    macro_rules! impl_bytes_producer {
        ($($producer:ident => |$url:pat_param| $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer for $producer {
                    fn produce($url: &str) -> Result<Vec<u8>, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_bytes_producer! {
        EmptyBodyProducer => |_| Ok(Vec::new()),
        NetworkErrorProducer => |_| Err(Error::new(ErrorKind::Transport, "Network error")),
    }

    pub(crate) use assert_url;
    pub(crate) use impl_bytes_producer;
}
