use crate::resolver::{self, DEFAULT_CONCURRENCY};
use dex_client::EntitySource;
use dex_protocol::Pokemon;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Page size large enough to request the entire catalog in one listing call.
pub const FULL_CATALOG_LIMIT: u32 = 1000;

/// Lifecycle of the shared cache. `Failed` carries the user-facing message
/// from the listing call; per-item detail failures never reach this state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

struct Inner {
    records: Arc<[Pokemon]>,
    status: LoadStatus,
    generation: u64,
}

/// Shared in-memory cache of the fully resolved catalog.
///
/// One instance is owned by the consuming context and handed to every view;
/// views never trigger their own aggregation. A run is committed only if no
/// newer run has started since it began (generation check), so a stale
/// in-flight `load` can never clobber the result of a later `refetch`.
pub struct CatalogStore {
    source: Arc<dyn EntitySource>,
    concurrency: usize,
    inner: Mutex<Inner>,
}

/// Cheap point-in-time view of the cache.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub records: Arc<[Pokemon]>,
    pub status: LoadStatus,
}

impl CatalogStore {
    pub fn new(source: Arc<dyn EntitySource>) -> Self {
        Self::with_concurrency(source, DEFAULT_CONCURRENCY)
    }

    pub fn with_concurrency(source: Arc<dyn EntitySource>, concurrency: usize) -> Self {
        Self {
            source,
            concurrency: concurrency.max(1),
            inner: Mutex::new(Inner {
                records: Vec::new().into(),
                status: LoadStatus::Idle,
                generation: 0,
            }),
        }
    }

    /// Run one aggregation pass. A call while a run is already in flight is
    /// a no-op; use [`CatalogStore::refetch`] to force a restart.
    pub async fn load(&self) {
        let generation = {
            let mut inner = self.inner.lock().await;
            if inner.status.is_loading() {
                log::debug!("Aggregation already in flight; load request ignored");
                return;
            }
            inner.status = LoadStatus::Loading;
            inner.generation += 1;
            inner.generation
        };
        self.run_aggregation(generation).await;
    }

    /// Restart aggregation regardless of current status. The newest run wins:
    /// any older run still in flight will be discarded at commit time.
    pub async fn refetch(&self) {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.status = LoadStatus::Loading;
            inner.generation += 1;
            inner.generation
        };
        self.run_aggregation(generation).await;
    }

    pub async fn snapshot(&self) -> CatalogSnapshot {
        let inner = self.inner.lock().await;
        CatalogSnapshot {
            records: Arc::clone(&inner.records),
            status: inner.status.clone(),
        }
    }

    async fn run_aggregation(&self, generation: u64) {
        log::info!("Aggregating catalog (run {generation})");
        match self.source.list_summaries(0, FULL_CATALOG_LIMIT).await {
            Ok(page) => {
                let records =
                    resolver::resolve_all(&self.source, &page.results, self.concurrency).await;
                let mut inner = self.inner.lock().await;
                if inner.generation != generation {
                    log::debug!(
                        "Discarding stale aggregation run {generation} (current {})",
                        inner.generation
                    );
                    return;
                }
                log::info!(
                    "Catalog ready: {} of {} records resolved",
                    records.len(),
                    page.results.len()
                );
                inner.records = records.into();
                inner.status = LoadStatus::Ready;
            }
            Err(err) => {
                let mut inner = self.inner.lock().await;
                if inner.generation != generation {
                    log::debug!(
                        "Discarding stale aggregation failure {generation} (current {})",
                        inner.generation
                    );
                    return;
                }
                log::warn!("Catalog listing failed: {err}");
                inner.records = Vec::new().into();
                inner.status = LoadStatus::Failed(err.to_string());
            }
        }
    }
}
