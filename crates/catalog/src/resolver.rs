use dex_client::EntitySource;
use dex_protocol::{Pokemon, PokemonSummary};
use std::sync::Arc;
use tokio::task::JoinSet;

pub const DEFAULT_CONCURRENCY: usize = 8;

/// Resolve every summary to a full detail record, best-effort.
///
/// Lookups run with bounded concurrency, but results are reassembled into
/// original summary order before being returned: cache insertion order is
/// an ordering contract consumers rely on, and nothing downstream re-sorts.
/// An individual lookup failure drops that summary and continues; the
/// output is therefore never longer than the input.
pub async fn resolve_all(
    source: &Arc<dyn EntitySource>,
    summaries: &[PokemonSummary],
    concurrency: usize,
) -> Vec<Pokemon> {
    let width = concurrency.max(1);
    log::debug!(
        "Resolving {} summaries (concurrency {width})",
        summaries.len()
    );

    let mut join: JoinSet<(usize, String, dex_client::Result<Pokemon>)> = JoinSet::new();
    let mut resolved: Vec<(usize, Pokemon)> = Vec::with_capacity(summaries.len());
    let mut next = 0usize;

    while next < summaries.len() || !join.is_empty() {
        while next < summaries.len() && join.len() < width {
            let source = Arc::clone(source);
            let name = summaries[next].name.clone();
            let idx = next;
            join.spawn(async move {
                let result = source.get_detail(&name).await;
                (idx, name, result)
            });
            next += 1;
        }

        match join.join_next().await {
            Some(Ok((idx, _, Ok(detail)))) => resolved.push((idx, detail)),
            Some(Ok((_, name, Err(err)))) => {
                log::warn!("Failed to load details for {name}: {err}");
            }
            Some(Err(err)) => log::warn!("Detail lookup task failed: {err}"),
            None => break,
        }
    }

    resolved.sort_by_key(|(idx, _)| *idx);
    resolved.into_iter().map(|(_, detail)| detail).collect()
}
