use crate::client::{ApiClient, SummaryPage};
use crate::error::Result;
use async_trait::async_trait;
use dex_protocol::Pokemon;

/// Remote catalog surface: one paged index listing plus per-entity detail
/// lookups. The aggregation layer depends on this seam rather than the
/// concrete HTTP client, so tests can supply an in-memory source.
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn list_summaries(&self, offset: u32, limit: u32) -> Result<SummaryPage>;

    async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon>;
}

#[async_trait]
impl EntitySource for ApiClient {
    async fn list_summaries(&self, offset: u32, limit: u32) -> Result<SummaryPage> {
        ApiClient::list_summaries(self, offset, limit).await
    }

    async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon> {
        ApiClient::get_detail(self, id_or_name).await
    }
}
