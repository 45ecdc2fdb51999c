//! Fetch-with-status: one async load exposed as loading / failed / ready.

use std::fmt::Display;
use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::i18n::Translations;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The one branch a section should render for this state. Failures show
    /// the generic localized error; the raw message stays in the state.
    pub fn view<'a>(&'a self, translations: &Translations) -> SectionView<'a, T> {
        match self {
            LoadState::Loading => SectionView::Loading(translations.common.loading),
            LoadState::Failed(_) => SectionView::Error(translations.common.error),
            LoadState::Ready(data) => SectionView::Ready(data),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Ready(data) => LoadState::Ready(f(data)),
            LoadState::Failed(message) => LoadState::Failed(message),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SectionView<'a, T> {
    Loading(&'static str),
    Error(&'static str),
    Ready(&'a T),
}

/// A single fetch running on the tokio runtime.
///
/// The fetcher is called once, when the resource is spawned. Dropping the
/// resource aborts a fetch that is still in flight.
#[derive(Debug)]
pub struct Resource<T> {
    state: watch::Receiver<LoadState<T>>,
    task: JoinHandle<()>,
}

impl<T> Resource<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn spawn<F, Fut, E>(fetcher: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: Display,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);

        let task = tokio::spawn(async move {
            let settled = match fetcher().await {
                Ok(data) => {
                    debug!("Section data loaded");
                    LoadState::Ready(data)
                }
                Err(err) => {
                    warn!(error = %err, "Section data failed to load");
                    LoadState::Failed(err.to_string())
                }
            };
            tx.send_replace(settled);
        });

        Self { state: rx, task }
    }

    pub fn state(&self) -> LoadState<T> {
        self.state.borrow().clone()
    }

    /// Waits until the fetch has either succeeded or failed.
    pub async fn settled(&mut self) -> LoadState<T> {
        match self.state.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => LoadState::Failed("fetch ended without a result".to_string()),
        }
    }
}

impl<T> Drop for Resource<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use std::future::pending;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn loading_until_fetch_resolves_then_ready() {
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let mut resource = Resource::spawn(move || async move {
            release_rx.await.ok();
            Ok::<_, String>(vec![1, 2, 3])
        });

        assert_eq!(resource.state(), LoadState::Loading);

        release_tx.send(()).unwrap();
        let state = resource.settled().await;

        assert_eq!(state, LoadState::Ready(vec![1, 2, 3]));
        assert!(!state.is_loading());
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn rejected_fetch_becomes_failed() {
        let mut resource =
            Resource::spawn(|| async { Err::<u32, _>("connection refused".to_string()) });

        let state = resource.settled().await;

        assert_eq!(state.error(), Some("connection refused"));
        assert!(state.data().is_none());
    }

    #[tokio::test]
    async fn fetcher_runs_exactly_once_and_state_changes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut resource = Resource::spawn(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>("profile")
        });

        let first = resource.settled().await;
        let second = resource.settled().await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, LoadState::Ready("profile"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn dropping_resource_aborts_in_flight_fetch() {
        let (guard_tx, guard_rx) = oneshot::channel::<()>();

        let resource = Resource::spawn(move || async move {
            let _guard = guard_tx;
            pending::<Result<u8, String>>().await
        });
        drop(resource);

        // The sender is dropped with the aborted future.
        assert!(guard_rx.await.is_err());
    }

    #[test]
    fn views_are_mutually_exclusive() {
        let t = Locale::En.translations();

        let loading: LoadState<u8> = LoadState::Loading;
        let failed: LoadState<u8> = LoadState::Failed("boom".to_string());
        let ready = LoadState::Ready(7u8);

        assert_eq!(loading.view(t), SectionView::Loading("Loading..."));
        assert_eq!(
            failed.view(t),
            SectionView::Error("Failed to load data. Please try again later.")
        );
        assert_eq!(ready.view(t), SectionView::Ready(&7));
    }

    #[test]
    fn map_keeps_status() {
        let failed: LoadState<u8> = LoadState::Failed("x".to_string());
        assert_eq!(failed.map(|n| n * 2), LoadState::Failed("x".to_string()));
        assert_eq!(LoadState::Ready(2u8).map(|n| n * 2), LoadState::Ready(4));
    }
}
