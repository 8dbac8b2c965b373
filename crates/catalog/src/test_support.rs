//! In-memory sources for exercising the aggregation layer without a network.

use async_trait::async_trait;
use dex_client::{ClientError, EntitySource, Result, SummaryPage};
use dex_protocol::{Pokemon, PokemonSummary, Sprites};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub(crate) fn pokemon(id: u32, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        height: 7,
        weight: 69,
        base_experience: Some(64),
        types: types.iter().map(|t| t.to_string()).collect(),
        abilities: Vec::new(),
        stats: Vec::new(),
        sprites: Sprites::default(),
    }
}

pub(crate) fn summaries(names: &[&str]) -> Vec<PokemonSummary> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| PokemonSummary {
            name: name.to_string(),
            url: format!("https://pokeapi.test/api/v2/pokemon/{}/", idx + 1),
        })
        .collect()
}

enum ListingOutcome {
    Page(Vec<String>),
    Fail,
}

/// Scripted source: a per-call listing script (last entry repeats) over a
/// fixed detail table.
pub(crate) struct StubSource {
    entries: Vec<(String, Vec<String>)>,
    listings: Vec<ListingOutcome>,
    fail_details: HashSet<String>,
    listing_calls: AtomicUsize,
}

impl StubSource {
    pub(crate) fn with_names(names: &[&str]) -> Self {
        Self::with_entries(
            &names
                .iter()
                .map(|name| (*name, &["normal"][..]))
                .collect::<Vec<_>>(),
        )
    }

    pub(crate) fn with_entries(entries: &[(&str, &[&str])]) -> Self {
        let names = entries.iter().map(|(name, _)| name.to_string()).collect();
        Self {
            entries: entries
                .iter()
                .map(|(name, types)| {
                    (
                        name.to_string(),
                        types.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
            listings: vec![ListingOutcome::Page(names)],
            fail_details: HashSet::new(),
            listing_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing_listing() -> Self {
        Self {
            entries: Vec::new(),
            listings: vec![ListingOutcome::Fail],
            fail_details: HashSet::new(),
            listing_calls: AtomicUsize::new(0),
        }
    }

    /// Script the next listing call to fail (after the existing script).
    pub(crate) fn then_listing_failure(mut self) -> Self {
        self.listings.push(ListingOutcome::Fail);
        self
    }

    pub(crate) fn failing_details(mut self, names: &[&str]) -> Self {
        self.fail_details = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub(crate) fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    fn detail_for(&self, id_or_name: &str) -> Option<Pokemon> {
        self.entries
            .iter()
            .position(|(name, _)| name == id_or_name)
            .map(|idx| {
                let (name, types) = &self.entries[idx];
                let types: Vec<&str> = types.iter().map(String::as_str).collect();
                pokemon(idx as u32 + 1, name, &types)
            })
    }
}

#[async_trait]
impl EntitySource for StubSource {
    async fn list_summaries(&self, offset: u32, limit: u32) -> Result<SummaryPage> {
        let call = self.listing_calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .listings
            .get(call)
            .unwrap_or_else(|| self.listings.last().expect("empty listing script"));
        match outcome {
            ListingOutcome::Fail => Err(ClientError::Network),
            ListingOutcome::Page(names) => {
                let window: Vec<&str> = names
                    .iter()
                    .map(String::as_str)
                    .skip(offset as usize)
                    .take(limit as usize)
                    .collect();
                Ok(SummaryPage {
                    count: names.len() as u32,
                    results: summaries(&window),
                })
            }
        }
    }

    async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon> {
        if self.fail_details.contains(id_or_name) {
            return Err(ClientError::Status { code: 404 });
        }
        self.detail_for(id_or_name)
            .ok_or(ClientError::Status { code: 404 })
    }
}

/// Source whose first listing call parks until released, so tests can hold
/// one aggregation run in flight while another completes.
pub(crate) struct GatedSource {
    first: Vec<String>,
    second: Vec<String>,
    listing_calls: AtomicUsize,
    entered_tx: Mutex<Option<oneshot::Sender<()>>>,
    release_rx: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedSource {
    /// Returns the source plus a receiver that fires once the first listing
    /// call is in flight and a sender that lets it proceed.
    pub(crate) fn new(
        first: &[&str],
        second: &[&str],
    ) -> (Arc<Self>, oneshot::Receiver<()>, oneshot::Sender<()>) {
        let (entered_tx, entered_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        let source = Arc::new(Self {
            first: first.iter().map(|n| n.to_string()).collect(),
            second: second.iter().map(|n| n.to_string()).collect(),
            listing_calls: AtomicUsize::new(0),
            entered_tx: Mutex::new(Some(entered_tx)),
            release_rx: Mutex::new(Some(release_rx)),
        });
        (source, entered_rx, release_tx)
    }

    pub(crate) fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }

    fn page(names: &[String]) -> SummaryPage {
        let window: Vec<&str> = names.iter().map(String::as_str).collect();
        SummaryPage {
            count: names.len() as u32,
            results: summaries(&window),
        }
    }

    fn all_names(&self) -> Vec<&String> {
        self.first.iter().chain(self.second.iter()).collect()
    }
}

#[async_trait]
impl EntitySource for GatedSource {
    async fn list_summaries(&self, _offset: u32, _limit: u32) -> Result<SummaryPage> {
        let call = self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            if let Some(tx) = self.entered_tx.lock().unwrap().take() {
                let _ = tx.send(());
            }
            let release = self.release_rx.lock().unwrap().take();
            if let Some(rx) = release {
                let _ = rx.await;
            }
            Ok(Self::page(&self.first))
        } else {
            Ok(Self::page(&self.second))
        }
    }

    async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon> {
        self.all_names()
            .iter()
            .position(|name| name.as_str() == id_or_name)
            .map(|idx| pokemon(idx as u32 + 1, id_or_name, &["normal"]))
            .ok_or(ClientError::Status { code: 404 })
    }
}
