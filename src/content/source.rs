//! Transports the loader fetches the content document through.
//!
//! Browser futures hold `Rc<RefCell<..>>` internally and are never `Send`,
//! but the loader has to be `Send + Sync` to live in Leptos context and to be
//! shared across server threads. On wasm32 the futures are wrapped in
//! [`SendWrapper`]; wasm32 has exactly one thread so nothing is ever moved
//! across threads.

use std::future::Future;

use reqwest::{Client, Url};

use super::error::FailureReason;

/// Something that can return the raw bytes stored at a candidate location.
pub trait DocumentSource: Send + Sync + 'static {
    fn fetch(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Vec<u8>, FailureReason>> + Send;
}

/// Fetches candidate locations over HTTP GET, resolving relative locations
/// against a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Option<Url>,
}

impl HttpSource {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base: Some(base),
        }
    }

    /// Only absolute candidate URLs can be fetched without a base.
    pub fn absolute() -> Self {
        Self {
            client: Client::new(),
            base: None,
        }
    }

    /// Resolve candidates against the address of the current page, the way
    /// the browser itself resolves relative links.
    #[cfg(feature = "hydrate")]
    pub fn from_window() -> Self {
        let base = web_sys::window()
            .and_then(|window| window.location().href().ok())
            .and_then(|href| Url::parse(&href).ok());
        if base.is_none() {
            tracing::warn!("could not read page location, relative content URLs will fail");
        }
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn resolve(&self, location: &str) -> Result<Url, FailureReason> {
        let resolved = match &self.base {
            Some(base) => base.join(location),
            None => Url::parse(location),
        };
        resolved.map_err(|e| FailureReason::Transport(format!("invalid URL '{location}': {e}")))
    }
}

impl DocumentSource for HttpSource {
    fn fetch(
        &self,
        location: &str,
    ) -> impl Future<Output = Result<Vec<u8>, FailureReason>> + Send {
        let request = self.resolve(location).map(|url| self.client.get(url));
        assume_send(async move {
            let response = request?
                .send()
                .await
                .map_err(|e| FailureReason::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FailureReason::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FailureReason::Transport(e.to_string()))?;
            Ok(body.to_vec())
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn assume_send<F: Future + Send>(future: F) -> F {
    future
}

#[cfg(target_arch = "wasm32")]
fn assume_send<F: Future>(future: F) -> SendWrapper<F> {
    SendWrapper::new(future)
}

#[cfg(target_arch = "wasm32")]
pub(crate) struct SendWrapper<F>(F);

#[cfg(target_arch = "wasm32")]
impl<F> SendWrapper<F> {
    pub(crate) fn new(future: F) -> Self {
        Self(future)
    }
}

#[cfg(target_arch = "wasm32")]
impl<F: Future> Future for SendWrapper<F> {
    type Output = F::Output;

    fn poll(
        self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Self::Output> {
        // Safety: the inner future is never moved out of the pinned wrapper.
        unsafe { self.map_unchecked_mut(|s| &mut s.0).poll(cx) }
    }
}

// Safety: wasm32 is single-threaded, there is no other thread to send to.
#[cfg(target_arch = "wasm32")]
unsafe impl<F> Send for SendWrapper<F> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_candidates_resolve_against_page() {
        let source = HttpSource::new(Url::parse("https://wellnex.example/landing/index.html").unwrap());
        assert_eq!(
            source.resolve("/data/data.json").unwrap().as_str(),
            "https://wellnex.example/data/data.json"
        );
        assert_eq!(
            source.resolve("data/data.json").unwrap().as_str(),
            "https://wellnex.example/landing/data/data.json"
        );
        assert_eq!(
            source.resolve("./data/data.json").unwrap().as_str(),
            "https://wellnex.example/landing/data/data.json"
        );
    }

    #[test]
    fn relative_candidate_without_base_is_a_transport_failure() {
        let source = HttpSource::absolute();
        assert!(matches!(
            source.resolve("data/data.json"),
            Err(FailureReason::Transport(_))
        ));
        assert!(source.resolve("http://localhost:3000/data/data.json").is_ok());
    }
}
