use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::wire::{DetailPayload, SummaryPagePayload};
use dex_protocol::{Pokemon, PokemonSummary};

/// One page of the summary listing.
#[derive(Debug, Clone)]
pub struct SummaryPage {
    pub results: Vec<PokemonSummary>,
    pub count: u32,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        log::debug!(
            "Initializing ApiClient for {} (timeout {:?})",
            config.base_url,
            config.timeout
        );
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClientError::Unknown(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the summary index.
    pub async fn list_summaries(&self, offset: u32, limit: u32) -> Result<SummaryPage> {
        let url = format!("{}/pokemon?offset={offset}&limit={limit}", self.base_url);
        log::debug!("GET {url}");
        let payload: SummaryPagePayload = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(SummaryPage {
            count: payload.count,
            results: payload.results.into_iter().map(Into::into).collect(),
        })
    }

    /// Fetch one full detail record by numeric id or name.
    pub async fn get_detail(&self, id_or_name: &str) -> Result<Pokemon> {
        let needle = id_or_name.trim().to_ascii_lowercase();
        let url = format!("{}/pokemon/{needle}", self.base_url);
        log::debug!("GET {url}");
        let payload: DetailPayload = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.into())
    }
}
