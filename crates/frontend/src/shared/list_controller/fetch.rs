//! Цикл загрузки коллекции.
//!
//! A new fetch supersedes any fetch still in flight for the same screen.
//! Superseded responses are not aborted, they are dropped on arrival. After the
//! screen unmounts every pending response is dropped.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use contracts::shared::list_query::{CollectionPage, CollectionQuery};
use serde::de::DeserializeOwned;

use crate::shared::api::{ApiClient, ApiError};

/// Generation counter shared by all fetches of one screen
#[derive(Debug, Clone)]
pub struct FetchTracker {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
}

impl Default for FetchTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Issued when a fetch starts; tells whether its response may still be applied
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    tracker: FetchTracker,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            generation,
            tracker: self.clone(),
        }
    }

    /// Called on screen teardown
    pub fn unmount(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.tracker.is_alive()
            && self.tracker.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Latest request: result goes to the screen
    Applied(Result<CollectionPage<T>, ApiError>),
    /// Superseded or unmounted: result is discarded
    Stale,
}

/// What a list screen renders
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenData<T> {
    Idle,
    Loading,
    Loaded(CollectionPage<T>),
    Failed(String),
}

impl<T> ScreenData<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenData::Loading)
    }

    pub fn total_count(&self) -> usize {
        match self {
            ScreenData::Loaded(page) => page.total_count,
            _ => 0,
        }
    }

    /// Replaces the whole page; rows are never merged across fetches
    pub fn apply(&mut self, outcome: FetchOutcome<T>) -> bool {
        match outcome {
            FetchOutcome::Stale => false,
            FetchOutcome::Applied(Ok(page)) => {
                *self = ScreenData::Loaded(page);
                true
            }
            FetchOutcome::Applied(Err(e)) => {
                *self = ScreenData::Failed(e.user_message());
                true
            }
        }
    }
}

/// Runs collection fetches for one screen and types the rows
pub struct CollectionFetcher<T> {
    api: ApiClient,
    endpoint: &'static str,
    tracker: FetchTracker,
    _rows: PhantomData<fn() -> T>,
}

impl<T> Clone for CollectionFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint,
            tracker: self.tracker.clone(),
            _rows: PhantomData,
        }
    }
}

impl<T: DeserializeOwned + 'static> CollectionFetcher<T> {
    pub fn new(api: ApiClient, endpoint: &'static str) -> Self {
        Self {
            api,
            endpoint,
            tracker: FetchTracker::new(),
            _rows: PhantomData,
        }
    }

    pub fn tracker(&self) -> &FetchTracker {
        &self.tracker
    }

    /// Starts a fetch. The ticket is taken immediately, so a later call
    /// supersedes this one even if neither future has been polled yet.
    pub fn fetch(&self, query: CollectionQuery) -> impl Future<Output = FetchOutcome<T>> + 'static {
        let ticket = self.tracker.begin();
        let api = self.api.clone();
        let endpoint = self.endpoint;

        async move {
            log::debug!(
                "fetch #{} {} page={} view={} filters={}",
                ticket.generation(),
                endpoint,
                query.page,
                query.view,
                query.filters.len()
            );
            let result = api.get_collection(endpoint, &query).await;

            if !ticket.is_current() {
                log::debug!("fetch #{} {} is stale, dropped", ticket.generation(), endpoint);
                return FetchOutcome::Stale;
            }

            let typed = result.and_then(decode_rows::<T>);
            if let Err(e) = &typed {
                log::warn!("fetch #{} {} failed: {}", ticket.generation(), endpoint, e);
            }
            FetchOutcome::Applied(typed)
        }
    }
}

fn decode_rows<T: DeserializeOwned>(
    page: CollectionPage<serde_json::Value>,
) -> Result<CollectionPage<T>, ApiError> {
    let rows = page
        .rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(CollectionPage {
        rows,
        total_count: page.total_count,
    })
}
