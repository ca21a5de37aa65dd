use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::{ApiError, PropertySource};
use crate::config::AppConfig;
use crate::mapper;
use crate::models::Property;
use crate::search::{self, FilterCriteria};

/// Generic message shown for any fetch failure
pub const LOAD_ERROR: &str = "Failed to load properties";

/// What the listings page currently has to render
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<Property>),
    Failed(String),
}

/// Display state of a single-listing page
///
/// A missing listing is its own state, not a load failure.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loaded(Property),
    NotFound,
    Failed(String),
}

struct Inner {
    /// Generation of the response currently on screen
    applied_generation: u64,
    state: FeedState,
}

/// Reactive result set of the listings page
///
/// Owns the filter criteria and re-fetches whenever they change. Every
/// request carries a generation number and responses only apply when newer
/// than the one already applied, so a slow response for an old request can
/// never overwrite results of a newer one.
pub struct PropertyFeed<S> {
    source: Arc<S>,
    config: AppConfig,
    criteria: FilterCriteria,
    issued: AtomicU64,
    inner: Arc<RwLock<Inner>>,
}

impl<S: PropertySource + 'static> PropertyFeed<S> {
    pub fn new(source: Arc<S>, config: AppConfig) -> Self {
        Self {
            source,
            config,
            criteria: FilterCriteria::default(),
            issued: AtomicU64::new(0),
            inner: Arc::new(RwLock::new(Inner {
                applied_generation: 0,
                state: FeedState::Loading,
            })),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Mutate the criteria and re-issue the backend query
    pub fn update_criteria(&mut self, apply: impl FnOnce(&mut FilterCriteria)) -> JoinHandle<()> {
        apply(&mut self.criteria);
        self.refresh()
    }

    /// Apply a debounced search term; empty input clears the criterion
    pub fn commit_search(&mut self, term: &str) -> JoinHandle<()> {
        let term = term.trim().to_string();
        self.update_criteria(|criteria| {
            criteria.search = if term.is_empty() { None } else { Some(term) };
        })
    }

    /// Fire a fetch for the current criteria
    ///
    /// Fire-and-forget; the handle is returned so callers that need a
    /// settled state (tests, the demo binary) can await completion.
    pub fn refresh(&self) -> JoinHandle<()> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let query = self.criteria.to_query();
        let sort_mode = self.criteria.sort;
        let source = Arc::clone(&self.source);
        let config = self.config.clone();
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            {
                let mut guard = inner.write().await;
                if generation > guard.applied_generation {
                    guard.state = FeedState::Loading;
                }
            }

            let next = match source.fetch(&query).await {
                Ok(raw) => {
                    let mut properties = mapper::normalize_all(&raw, &config);
                    search::sort(&mut properties, sort_mode);
                    FeedState::Loaded(properties)
                }
                Err(err) => {
                    warn!("property fetch failed: {err}");
                    FeedState::Failed(LOAD_ERROR.to_string())
                }
            };

            let mut guard = inner.write().await;
            // Responses apply in request order, not arrival order
            if generation > guard.applied_generation {
                guard.applied_generation = generation;
                guard.state = next;
            }
        })
    }

    pub async fn state(&self) -> FeedState {
        self.inner.read().await.state.clone()
    }

    /// Loaded properties, or empty while loading / after a failure
    pub async fn properties(&self) -> Vec<Property> {
        match &self.inner.read().await.state {
            FeedState::Loaded(properties) => properties.clone(),
            _ => Vec::new(),
        }
    }
}

/// Fetch and normalize one listing for the detail page
pub async fn load_detail<S: PropertySource>(
    source: &S,
    id: &str,
    config: &AppConfig,
) -> DetailState {
    match source.fetch_one(id).await {
        Ok(raw) => DetailState::Loaded(mapper::normalize(&raw, config)),
        Err(ApiError::NotFound) => DetailState::NotFound,
        Err(err) => {
            warn!("detail fetch for {id} failed: {err}");
            DetailState::Failed(LOAD_ERROR.to_string())
        }
    }
}
