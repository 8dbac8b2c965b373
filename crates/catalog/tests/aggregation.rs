//! End-to-end aggregation: in-memory source → store → views.

use async_trait::async_trait;
use dex_catalog::{CatalogStore, CatalogView, LoadStatus, Pager};
use dex_client::{ClientError, EntitySource, Result, SummaryPage};
use dex_protocol::{Pokemon, PokemonSummary, Sprites, TypeTag};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Deterministic catalog of `n` entries cycling through a few type pairs.
struct FixtureSource {
    count: usize,
    recount: Option<usize>,
    fail_details: HashSet<String>,
    listing_calls: AtomicUsize,
}

impl FixtureSource {
    fn new(count: usize) -> Self {
        Self {
            count,
            recount: None,
            fail_details: HashSet::new(),
            listing_calls: AtomicUsize::new(0),
        }
    }

    /// Listing calls after the first report a catalog of this size.
    fn shrinking_to(mut self, recount: usize) -> Self {
        self.recount = Some(recount);
        self
    }

    fn failing_details(mut self, names: &[&str]) -> Self {
        self.fail_details = names.iter().map(|n| n.to_string()).collect();
        self
    }

    fn current_count(&self, call: usize) -> usize {
        match self.recount {
            Some(recount) if call > 0 => recount,
            _ => self.count,
        }
    }

    fn name_for(idx: usize) -> String {
        format!("species-{:03}", idx + 1)
    }

    fn types_for(idx: usize) -> Vec<String> {
        match idx % 4 {
            0 => vec!["fire".to_string(), "flying".to_string()],
            1 => vec!["water".to_string()],
            2 => vec!["grass".to_string(), "poison".to_string()],
            _ => vec!["normal".to_string()],
        }
    }
}

#[async_trait]
impl EntitySource for FixtureSource {
    async fn list_summaries(&self, offset: u32, limit: u32) -> Result<SummaryPage> {
        let call = self.listing_calls.fetch_add(1, Ordering::SeqCst);
        let count = self.current_count(call);
        let results = (0..count)
            .skip(offset as usize)
            .take(limit as usize)
            .map(|idx| PokemonSummary {
                name: Self::name_for(idx),
                url: format!("https://pokeapi.test/api/v2/pokemon/{}/", idx + 1),
            })
            .collect();
        Ok(SummaryPage {
            count: count as u32,
            results,
        })
    }

    async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon> {
        if self.fail_details.contains(id_or_name) {
            return Err(ClientError::Status { code: 404 });
        }
        let idx = (0..self.count)
            .find(|idx| Self::name_for(*idx) == id_or_name)
            .ok_or(ClientError::Status { code: 404 })?;
        Ok(Pokemon {
            id: idx as u32 + 1,
            name: id_or_name.to_string(),
            height: 7,
            weight: 69,
            base_experience: Some(64),
            types: Self::types_for(idx),
            abilities: Vec::new(),
            stats: Vec::new(),
            sprites: Sprites::default(),
        })
    }
}

async fn loaded_store(source: FixtureSource) -> Arc<CatalogStore> {
    let store = Arc::new(CatalogStore::new(Arc::new(source)));
    store.load().await;
    store
}

#[tokio::test]
async fn hundred_twenty_records_paginate_into_three_pages() {
    let store = loaded_store(FixtureSource::new(120)).await;
    let view = CatalogView::new(store);
    let mut pager = Pager::new();

    let first = view.all_pages(&pager).await;
    assert_eq!(first.status, LoadStatus::Ready);
    assert_eq!(first.total_pages, 3);
    assert!(first.show_controls);
    assert_eq!(first.items.len(), 50);
    assert_eq!(first.items[0].name, "species-001");

    pager.go_to(3, 120);
    let last = view.all_pages(&pager).await;
    assert_eq!(last.current_page, 3);
    assert_eq!(last.items.len(), 20);
    assert_eq!(last.items[19].name, "species-120");

    // Advancing past the last page is a no-op.
    pager.next(120);
    let clamped = view.all_pages(&pager).await;
    assert_eq!(clamped.current_page, 3);
}

#[tokio::test]
async fn failed_lookups_shrink_the_catalog_without_reordering() {
    let store = loaded_store(
        FixtureSource::new(5).failing_details(&["species-002", "species-004"]),
    )
    .await;

    let snap = store.snapshot().await;
    assert_eq!(snap.status, LoadStatus::Ready);
    let names: Vec<&str> = snap.records.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["species-001", "species-003", "species-005"]);
}

#[tokio::test]
async fn category_views_project_the_shared_cache() {
    let store = loaded_store(FixtureSource::new(8)).await;
    let view = CatalogView::new(store);

    // Indices 0 and 4 are fire/flying; both views see both records.
    let fire = view.by_type(TypeTag::Fire).await;
    let flying = view.by_type(TypeTag::Flying).await;
    let fire_names: Vec<&str> = fire.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(fire_names, vec!["species-001", "species-005"]);
    assert_eq!(fire.items, flying.items);

    // Unrepresented categories are empty, not errors.
    let dragon = view.by_type(TypeTag::Dragon).await;
    assert_eq!(dragon.status, LoadStatus::Ready);
    assert!(dragon.items.is_empty());
}

#[tokio::test]
async fn views_do_not_trigger_aggregation() {
    let store = Arc::new(CatalogStore::new(Arc::new(FixtureSource::new(3))));
    let view = CatalogView::new(Arc::clone(&store));

    let before = view.all_pages(&Pager::new()).await;
    assert_eq!(before.status, LoadStatus::Idle);
    assert!(before.items.is_empty());

    store.load().await;
    let after = view.all_pages(&Pager::new()).await;
    assert_eq!(after.status, LoadStatus::Ready);
    assert_eq!(after.items.len(), 3);
}

#[tokio::test]
async fn shrinking_refetch_reclamps_a_stranded_pager() {
    let store = loaded_store(FixtureSource::new(120).shrinking_to(40)).await;
    assert_eq!(store.snapshot().await.records.len(), 120);

    let mut pager = Pager::new();
    pager.go_to(3, 120);

    // The refetch wholesale-replaces the records with a smaller catalog; the
    // pager left on page 3 clamps back into range on its next read.
    store.refetch().await;
    let snap = store.snapshot().await;
    assert_eq!(snap.status, LoadStatus::Ready);
    assert_eq!(snap.records.len(), 40);

    let view = CatalogView::new(store);
    let page = view.all_pages(&pager).await;
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 40);
    assert!(!page.show_controls);
}
