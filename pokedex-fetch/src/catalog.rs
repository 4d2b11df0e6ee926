use futures::stream::{self, StreamExt, TryStreamExt};
use pokedex_core::NormalizedRecord;
use tokio::sync::mpsc;

use crate::detail::fetch_details;
use crate::error::FetchError;
use crate::settings::FetchOptions;
use crate::transport::{Transport, get_json};
use crate::types::IndexResponse;

/// Progress events emitted during a catalog load, consumed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// Requesting the bounded index.
    FetchingIndex,
    /// Index received; `total` item fetches will follow.
    IndexFetched { total: usize },
    /// An item fetch has started.
    ItemStarted { index: usize, name: String },
    /// An item was fetched and normalized.
    ItemCompleted {
        index: usize,
        name: String,
        title: String,
    },
    /// An item failed. The load will abort.
    ItemFailed {
        index: usize,
        name: String,
        reason: String,
    },
    /// All items fetched.
    Done,
}

/// Load the whole catalog.
///
/// Fetches the index, then every item's details with at most
/// `options.concurrency` requests in flight. Records come back in index
/// order. The first failure aborts the load and drops outstanding fetches,
/// so either every record is returned or none is.
pub async fn fetch_catalog<T: Transport>(
    transport: &T,
    options: &FetchOptions,
    events: mpsc::UnboundedSender<FetchEvent>,
) -> Result<Vec<NormalizedRecord>, FetchError> {
    let _ = events.send(FetchEvent::FetchingIndex);

    let index_url = options.index_url();
    let index: IndexResponse = get_json(transport, &index_url).await.inspect_err(|e| {
        log::error!("Failed to fetch catalog index {}: {}", index_url, e);
    })?;

    let total = index.results.len();
    let _ = events.send(FetchEvent::IndexFetched { total });
    log::debug!(
        "Index lists {} items, fetching with {} workers",
        total,
        options.concurrency
    );

    let records: Vec<NormalizedRecord> = stream::iter(index.results.into_iter().enumerate())
        .map(|(index, entry)| {
            let events = events.clone();
            async move {
                let _ = events.send(FetchEvent::ItemStarted {
                    index,
                    name: entry.name.clone(),
                });

                match fetch_details(transport, &entry.url, &options.language, options.name_policy)
                    .await
                {
                    Ok(record) => {
                        let _ = events.send(FetchEvent::ItemCompleted {
                            index,
                            name: entry.name,
                            title: record.title(),
                        });
                        Ok(record)
                    }
                    Err(e) => {
                        log::error!("Failed to fetch {} ({}): {}", entry.name, entry.url, e);
                        let _ = events.send(FetchEvent::ItemFailed {
                            index,
                            name: entry.name,
                            reason: e.to_string(),
                        });
                        Err(e)
                    }
                }
            }
        })
        .buffered(options.concurrency.max(1))
        .try_collect()
        .await?;

    let _ = events.send(FetchEvent::Done);
    Ok(records)
}
