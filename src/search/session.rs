//! Lazy-loading search session
//!
//! The command palette costs nothing until it is first opened: no item list
//! is read at startup. The first [`SearchSession::open`] kicks off a load on
//! a background thread, and the UI keeps polling [`SearchSession::poll`] each
//! tick to move the session forward.
//!
//! Load progress is a single three-state machine rather than a pair of
//! booleans, so "loading" and "loaded" can never both be true:
//!
//! - `NotLoaded`: nothing fetched yet, or the last fetch failed
//! - `Loading`: a fetch is in flight on the background thread
//! - `Ready`: items are cached for the rest of the process
//!
//! Closing the palette never discards state. The query text and loaded items
//! survive, so reopening is instant, and a load still in flight at close time
//! is allowed to finish and populate the cache for the next open. A failed
//! load records the error for display and falls back to `NotLoaded`, which
//! makes the next `open()` retry. No timeout is imposed on the fetch; a source
//! that hangs leaves the session loading until the process exits.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::Result;

use crate::models::ContentItem;
use crate::search::filter::filter_items;

/// Where the palette's items come from.
///
/// The terminal UI reads the generated search index and falls back to
/// scanning the content tree; tests substitute an in-memory source.
pub trait ItemSource: Send + Sync {
    fn list_items(&self) -> Result<Vec<ContentItem>>;
}

/// Sink for item selection.
///
/// Selecting a result hands the item's site URL to a navigator, which decides
/// what "go there" means: the UI switches routes, tests just record the URL.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// A fetch in flight on the background thread.
struct PendingLoad {
    rx: Receiver<Result<Vec<ContentItem>>>,
}

enum LoadState {
    NotLoaded,
    Loading(PendingLoad),
    Ready(Vec<ContentItem>),
}

/// State for one command palette: visibility, query text, and the item cache.
pub struct SearchSession {
    source: Arc<dyn ItemSource>,
    open: bool,
    query: String,
    load: LoadState,
    last_error: Option<String>,
}

impl SearchSession {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            open: false,
            query: String::new(),
            load: LoadState::NotLoaded,
            last_error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading(_))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query text. Pure state, applied on the next filter call.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// The error from the most recent failed load, if the items are still
    /// missing because of it.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Items loaded so far. Empty until a load completes.
    pub fn loaded_items(&self) -> &[ContentItem] {
        match &self.load {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    /// Open the palette, starting a background load on the first open.
    ///
    /// Opening while a load is already in flight, or after one completed,
    /// never triggers a second fetch. After a failed load the state is back
    /// at `NotLoaded`, so the next open retries.
    pub fn open(&mut self) {
        self.open = true;

        if matches!(self.load, LoadState::NotLoaded) {
            let source = Arc::clone(&self.source);
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                // The session may be gone by the time the fetch finishes
                let _ = tx.send(source.list_items());
            });
            self.load = LoadState::Loading(PendingLoad { rx });
        }
    }

    /// Close the palette. Query text and loaded items are retained, and an
    /// in-flight load keeps running.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Drive the load forward without blocking.
    ///
    /// Called from the UI tick loop whether or not the palette is open.
    /// Returns `true` when the load state changed and a redraw is warranted.
    pub fn poll(&mut self) -> bool {
        let LoadState::Loading(pending) = &self.load else {
            return false;
        };

        match pending.rx.try_recv() {
            Ok(Ok(items)) => {
                self.load = LoadState::Ready(items);
                self.last_error = None;
                true
            }
            Ok(Err(e)) => {
                self.last_error = Some(format!("{:#}", e));
                self.load = LoadState::NotLoaded;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Sender dropped without a result, i.e. the load thread
                // panicked. Treat it like a failed load.
                self.last_error = Some("content load aborted unexpectedly".to_string());
                self.load = LoadState::NotLoaded;
                true
            }
        }
    }

    /// Results for the current query, in loaded-item order.
    pub fn filter(&self) -> Vec<&ContentItem> {
        filter_items(self.loaded_items(), &self.query)
    }

    /// Navigate to a chosen item and close the palette.
    pub fn select(&mut self, url: &str, navigator: &mut dyn Navigator) {
        navigator.navigate(url);
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    use anyhow::bail;

    use crate::models::ItemMetadata;

    use super::*;

    struct MockSource {
        items: Vec<ContentItem>,
        calls: AtomicUsize,
        fail_first: usize,
        delay: Duration,
    }

    impl MockSource {
        fn new(items: Vec<ContentItem>) -> Self {
            Self {
                items,
                calls: AtomicUsize::new(0),
                fail_first: 0,
                delay: Duration::ZERO,
            }
        }

        fn failing_first(mut self, count: usize) -> Self {
            self.fail_first = count;
            self
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ItemSource for MockSource {
        fn list_items(&self) -> Result<Vec<ContentItem>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.delay > Duration::ZERO {
                thread::sleep(self.delay);
            }
            if call <= self.fail_first {
                bail!("content source offline");
            }
            Ok(self.items.clone())
        }
    }

    #[derive(Default)]
    struct MockNavigator {
        visited: Vec<String>,
    }

    impl Navigator for MockNavigator {
        fn navigate(&mut self, url: &str) {
            self.visited.push(url.to_string());
        }
    }

    fn test_item(title: &str) -> ContentItem {
        ContentItem {
            kind: "note".to_string(),
            url: format!("/notes/{}", title.to_lowercase()),
            metadata: ItemMetadata {
                title: title.to_string(),
                date: "2024-01-01".to_string(),
                description: None,
                tags: Vec::new(),
            },
        }
    }

    /// Poll until the in-flight load settles, panicking on a hung load.
    fn pump(session: &mut SearchSession) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while session.is_loading() {
            session.poll();
            assert!(Instant::now() < deadline, "load did not settle in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_new_session_is_closed_and_empty() {
        let session = SearchSession::new(Arc::new(MockSource::new(vec![])));

        assert!(!session.is_open());
        assert!(!session.is_loading());
        assert_eq!(session.query(), "");
        assert!(session.loaded_items().is_empty());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_first_open_loads_items() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha"), test_item("Beta")]));
        let mut session = SearchSession::new(source.clone());

        session.open();
        assert!(session.is_open());
        assert!(session.is_loading());

        pump(&mut session);

        assert_eq!(session.loaded_items().len(), 2);
        assert!(session.last_error().is_none());
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_reopen_does_not_refetch() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha")]));
        let mut session = SearchSession::new(source.clone());

        session.open();
        pump(&mut session);
        session.close();
        assert!(!session.is_open());

        session.open();
        assert!(!session.is_loading());
        assert_eq!(session.loaded_items().len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_close_preserves_query_and_items() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha")]));
        let mut session = SearchSession::new(source);

        session.open();
        pump(&mut session);
        session.set_query("alp");
        session.close();

        assert_eq!(session.query(), "alp");
        assert_eq!(session.loaded_items().len(), 1);

        session.open();
        assert_eq!(session.query(), "alp");
        assert_eq!(session.filter().len(), 1);
    }

    #[test]
    fn test_rapid_reopen_triggers_single_fetch() {
        let source = Arc::new(
            MockSource::new(vec![test_item("Alpha")]).with_delay(Duration::from_millis(50)),
        );
        let mut session = SearchSession::new(source.clone());

        // Open, close, open again before the first fetch resolves
        session.open();
        session.close();
        session.open();
        assert!(session.is_loading());

        pump(&mut session);

        assert_eq!(source.call_count(), 1);
        assert_eq!(session.loaded_items().len(), 1);
    }

    #[test]
    fn test_failed_load_records_error_and_stays_empty() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha")]).failing_first(1));
        let mut session = SearchSession::new(source.clone());

        session.open();
        pump(&mut session);

        assert!(session.loaded_items().is_empty());
        assert!(session.last_error().is_some());
        assert!(session.last_error().unwrap().contains("offline"));
        assert!(session.is_open(), "palette stays open after a failed load");
    }

    #[test]
    fn test_failed_load_retries_on_next_open() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha")]).failing_first(1));
        let mut session = SearchSession::new(source.clone());

        session.open();
        pump(&mut session);
        assert!(session.loaded_items().is_empty());
        session.close();

        session.open();
        pump(&mut session);

        assert_eq!(source.call_count(), 2);
        assert_eq!(session.loaded_items().len(), 1);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_load_finishes_while_closed() {
        let source = Arc::new(
            MockSource::new(vec![test_item("Alpha")]).with_delay(Duration::from_millis(30)),
        );
        let mut session = SearchSession::new(source.clone());

        session.open();
        session.close();
        assert!(session.is_loading());

        // The tick loop keeps polling even though the palette is closed
        pump(&mut session);

        assert!(!session.is_open());
        assert_eq!(session.loaded_items().len(), 1);
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_poll_without_load_in_flight_is_noop() {
        let mut session = SearchSession::new(Arc::new(MockSource::new(vec![])));
        assert!(!session.poll());

        session.open();
        pump(&mut session);
        assert!(!session.poll());
    }

    #[test]
    fn test_filter_applies_query_to_loaded_items() {
        let source = Arc::new(MockSource::new(vec![
            test_item("React Hooks"),
            test_item("Rust Ownership"),
        ]));
        let mut session = SearchSession::new(source);

        session.open();
        pump(&mut session);

        session.set_query("");
        assert_eq!(session.filter().len(), 2);

        session.set_query("react");
        let results = session.filter();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metadata.title, "React Hooks");
    }

    #[test]
    fn test_filter_before_load_is_empty() {
        let session = SearchSession::new(Arc::new(MockSource::new(vec![test_item("Alpha")])));
        assert!(session.filter().is_empty());
    }

    #[test]
    fn test_select_navigates_and_closes() {
        let source = Arc::new(MockSource::new(vec![test_item("Alpha")]));
        let mut session = SearchSession::new(source);
        let mut navigator = MockNavigator::default();

        session.open();
        pump(&mut session);
        session.set_query("alp");

        session.select("/notes/alpha", &mut navigator);

        assert_eq!(navigator.visited, vec!["/notes/alpha"]);
        assert!(!session.is_open());
        // Items and query survive for the next open
        assert_eq!(session.query(), "alp");
        assert_eq!(session.loaded_items().len(), 1);
    }
}
