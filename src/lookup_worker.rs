use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::lookup::Lookup;
use crate::types::{AppEvent, LookupRequest, Profile};

/// Background task that serves lookup requests from the search controller.
///
/// Each request gets its own task so a slow blocklist fetch never holds up a
/// resolution. Calls inside one request run strictly in sequence. Nothing
/// in flight is cancelled; the controller drops stale answers by generation.
pub async fn run_lookup_worker(
    lookup: Arc<dyn Lookup>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    event_tx: UnboundedSender<AppEvent>,
) -> Result<()> {
    log::info!("[worker] lookup worker started");

    while let Some(request) = request_rx.recv().await {
        let lookup = Arc::clone(&lookup);
        let event_tx = event_tx.clone();
        tokio::spawn(async move {
            let event = serve(lookup.as_ref(), request).await;
            if event_tx.send(event).is_err() {
                log::debug!("[worker] event channel closed, dropping result");
            }
        });
    }

    log::info!("[worker] request channel closed, shutting down");
    Ok(())
}

/// Run one request to completion and build the event that answers it
pub async fn serve(lookup: &dyn Lookup, request: LookupRequest) -> AppEvent {
    match request {
        LookupRequest::Resolve { generation, handle } => {
            let profile = resolve_profile(lookup, &handle).await;
            AppEvent::Resolved { generation, profile }
        }
        LookupRequest::Blocklist { generation, handle } => {
            let entries = lookup.fetch_blocklist(&handle).await;
            AppEvent::BlocklistLoaded { generation, entries }
        }
    }
}

/// Handle -> identifier -> profile. The profile fetch is skipped when the
/// handle does not resolve.
pub async fn resolve_profile(lookup: &dyn Lookup, handle: &str) -> Option<Profile> {
    let identifier = lookup.resolve_identifier(handle).await?;
    lookup.fetch_profile(&identifier).await
}
