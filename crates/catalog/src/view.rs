use crate::filter::filter_by_type;
use crate::page::Pager;
use crate::store::{CatalogStore, LoadStatus};
use dex_protocol::{Pokemon, TypeTag};
use std::sync::Arc;

/// Composes the shared cache with the pagination engine and the category
/// filter into renderable view snapshots. Stateless itself: the store owns
/// the records, the caller owns the pager.
pub struct CatalogView {
    store: Arc<CatalogStore>,
}

/// Renderable state of the unfiltered view.
#[derive(Debug, Clone)]
pub struct PagedView {
    pub items: Vec<Pokemon>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Pagination controls are hidden entirely for a single page.
    pub show_controls: bool,
    pub status: LoadStatus,
}

/// Renderable state of one category view: the whole filtered subsequence,
/// no windowing.
#[derive(Debug, Clone)]
pub struct TypeView {
    pub tag: TypeTag,
    pub items: Vec<Pokemon>,
    pub status: LoadStatus,
}

impl CatalogView {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn all_pages(&self, pager: &Pager) -> PagedView {
        let snap = self.store.snapshot().await;
        let total_pages = pager.total_pages(snap.records.len());
        PagedView {
            items: pager.slice(&snap.records).to_vec(),
            current_page: pager.current_page(snap.records.len()),
            total_pages,
            show_controls: total_pages > 1,
            status: snap.status,
        }
    }

    pub async fn by_type(&self, tag: TypeTag) -> TypeView {
        let snap = self.store.snapshot().await;
        TypeView {
            tag,
            items: filter_by_type(&snap.records, tag.as_str())
                .into_iter()
                .cloned()
                .collect(),
            status: snap.status,
        }
    }

    /// Record count per category tab, in canonical tab order.
    pub async fn tab_counts(&self) -> Vec<(TypeTag, usize)> {
        let snap = self.store.snapshot().await;
        TypeTag::ALL
            .iter()
            .map(|tag| (*tag, filter_by_type(&snap.records, tag.as_str()).len()))
            .collect()
    }
}
