//! Site content loading.
//!
//! Every section of the page reads its copy from one JSON document. A
//! [`ContentLoader`] fetches that document at most once, trying each candidate
//! location in order, and hands each caller the section it asked for.
//! Callers that arrive while a fetch is running attach to it instead of
//! starting their own. Failed fetches are not cached.

mod document;
mod error;
mod source;
mod timer;

use std::pin::pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::{self, BoxFuture, Either, FutureExt, Shared};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

pub use document::ConfigDocument;
pub use error::{ContentError, FailureReason, LocationFailure};
pub use source::{DocumentSource, HttpSource};

/// Where the document is looked for, in priority order.
pub const DEFAULT_CANDIDATES: [&str; 3] = ["/data/data.json", "data/data.json", "./data/data.json"];

/// Upper bound on a single candidate attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ContentSettings {
    pub candidates: Vec<String>,
    /// `None` waits on a location for as long as it takes.
    pub timeout: Option<Duration>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ContentSettings {
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

type LoadResult = Result<Arc<ConfigDocument>, ContentError>;
type PendingLoad = Shared<BoxFuture<'static, LoadResult>>;

/// Fetch-once, share-everywhere access to the site content document.
///
/// Cloning is cheap and every clone shares the same cache.
pub struct ContentLoader<S = HttpSource> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for ContentLoader<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<S> {
    source: Arc<S>,
    candidates: Arc<[String]>,
    timeout: Option<Duration>,
    state: Mutex<LoadState>,
}

#[derive(Default)]
struct LoadState {
    cached: Option<Arc<ConfigDocument>>,
    pending: Option<(u64, PendingLoad)>,
    next_load: u64,
}

enum Ticket {
    Ready(Arc<ConfigDocument>),
    Wait(u64, PendingLoad),
}

#[cfg(feature = "hydrate")]
impl ContentLoader<HttpSource> {
    /// Loader for the running page: candidates resolve against the page URL.
    pub fn for_window(settings: ContentSettings) -> Self {
        Self::new(HttpSource::from_window(), settings)
    }
}

impl<S: DocumentSource> ContentLoader<S> {
    pub fn new(source: S, settings: ContentSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                source: Arc::new(source),
                candidates: settings.candidates.into(),
                timeout: settings.timeout,
                state: Mutex::new(LoadState::default()),
            }),
        }
    }

    /// The value stored under `name` in the content document.
    pub async fn section(&self, name: &str) -> Result<Value, ContentError> {
        let document = self.document().await?;
        document.section(name).cloned()
    }

    /// Like [`section`](Self::section), decoded into a section model.
    pub async fn section_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, ContentError> {
        let value = self.section(name).await?;
        serde_json::from_value(value).map_err(|e| ContentError::Malformed {
            section: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// The whole document, from cache or from the one fetch in flight.
    pub async fn document(&self) -> Result<Arc<ConfigDocument>, ContentError> {
        let (load_id, pending) = match self.ticket() {
            Ticket::Ready(document) => return Ok(document),
            Ticket::Wait(load_id, pending) => (load_id, pending),
        };

        let result = pending.await;
        self.settle(load_id, &result);
        result
    }

    /// Forget the cached document and any fetch in flight.
    ///
    /// A fetch that is still running keeps serving the callers already
    /// attached to it, but its result is not cached.
    pub fn clear_cache(&self) {
        let mut state = self.state();
        state.cached = None;
        state.pending = None;
        debug!("content cache cleared");
    }

    pub fn is_cached(&self) -> bool {
        self.state().cached.is_some()
    }

    fn ticket(&self) -> Ticket {
        let mut state = self.state();

        if let Some(document) = &state.cached {
            return Ticket::Ready(Arc::clone(document));
        }

        if let Some((load_id, pending)) = &state.pending {
            debug!(load_id, "joining content fetch in flight");
            return Ticket::Wait(*load_id, pending.clone());
        }

        let load_id = state.next_load;
        state.next_load += 1;
        debug!(load_id, "starting content fetch");

        let pending = fetch_sequence(
            Arc::clone(&self.inner.source),
            Arc::clone(&self.inner.candidates),
            self.inner.timeout,
        )
        .boxed()
        .shared();
        state.pending = Some((load_id, pending.clone()));
        Ticket::Wait(load_id, pending)
    }

    fn settle(&self, load_id: u64, result: &LoadResult) {
        let mut state = self.state();
        // Only the fetch that is still current may touch the state; a stale
        // one was superseded by clear_cache.
        if !matches!(&state.pending, Some((current, _)) if *current == load_id) {
            return;
        }
        state.pending = None;
        if let Ok(document) = result {
            state.cached = Some(Arc::clone(document));
        }
    }

    fn state(&self) -> MutexGuard<'_, LoadState> {
        // The state is only ever assigned whole, a panic mid-update cannot
        // leave it half written.
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn fetch_sequence<S: DocumentSource>(
    source: Arc<S>,
    candidates: Arc<[String]>,
    timeout: Option<Duration>,
) -> LoadResult {
    let mut failures = Vec::with_capacity(candidates.len());

    for location in candidates.iter() {
        debug!(%location, "trying content location");
        match fetch_location(source.as_ref(), location, timeout).await {
            Ok(document) => {
                info!(%location, sections = document.section_names().count(), "content document loaded");
                return Ok(Arc::new(document));
            }
            Err(reason) => {
                warn!(%location, %reason, "content location failed");
                failures.push(LocationFailure {
                    location: location.clone(),
                    reason,
                });
            }
        }
    }

    Err(ContentError::Unreachable { failures })
}

async fn fetch_location<S: DocumentSource>(
    source: &S,
    location: &str,
    timeout: Option<Duration>,
) -> Result<ConfigDocument, FailureReason> {
    let body = match timeout {
        Some(limit) => {
            let fetch = pin!(source.fetch(location));
            let deadline = pin!(timer::sleep(limit));
            match future::select(fetch, deadline).await {
                Either::Left((body, _)) => body?,
                Either::Right(_) => return Err(FailureReason::TimedOut),
            }
        }
        None => source.fetch(location).await?,
    };
    ConfigDocument::from_slice(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        body: &'static str,
        fetches: AtomicUsize,
    }

    impl DocumentSource for FixedSource {
        fn fetch(
            &self,
            _location: &str,
        ) -> impl Future<Output = Result<Vec<u8>, FailureReason>> + Send {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let body = self.body.as_bytes().to_vec();
            async move { Ok(body) }
        }
    }

    fn loader(body: &'static str) -> ContentLoader<FixedSource> {
        ContentLoader::new(
            FixedSource {
                body,
                fetches: AtomicUsize::new(0),
            },
            ContentSettings::default(),
        )
    }

    #[test]
    fn default_settings_use_all_three_candidates() {
        let settings = ContentSettings::default();
        assert_eq!(
            settings.candidates,
            vec!["/data/data.json", "data/data.json", "./data/data.json"]
        );
        assert_eq!(settings.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[tokio::test]
    async fn settles_into_cache() {
        let loader = loader(r#"{"hero": {"title": "X"}}"#);
        assert!(!loader.is_cached());
        loader.section("hero").await.unwrap();
        assert!(loader.is_cached());
        assert!(loader.inner.state.lock().unwrap().pending.is_none());
    }

    #[tokio::test]
    async fn clones_share_one_cache() {
        let loader = loader(r#"{"hero": {}}"#);
        let other = loader.clone();
        loader.document().await.unwrap();
        other.document().await.unwrap();
        assert_eq!(loader.inner.source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_fetch_does_not_repopulate_cleared_cache() {
        let loader = loader(r#"{"hero": {}}"#);
        let Ticket::Wait(load_id, pending) = loader.ticket() else {
            panic!("expected a fresh fetch");
        };
        loader.clear_cache();

        let result = pending.await;
        loader.settle(load_id, &result);

        assert!(result.is_ok());
        assert!(!loader.is_cached());
    }

    #[tokio::test]
    async fn section_as_reports_malformed_sections() {
        #[derive(Debug, serde::Deserialize)]
        struct Titled {
            #[allow(dead_code)]
            title: String,
        }

        let loader = loader(r#"{"hero": {"title": 42}}"#);
        let err = loader.section_as::<Titled>("hero").await.unwrap_err();
        assert!(matches!(err, ContentError::Malformed { ref section, .. } if section == "hero"));
    }
}
