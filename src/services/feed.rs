use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::FeedRelay;
use crate::logic;
use crate::model::SourceOutcome;

/// One aggregation cycle to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Token issued by the model; echoed back in the response
    pub token: u64,
    /// Feed URLs, fetched in this order
    pub sources: Vec<String>,
}

/// Result of one aggregation cycle
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub token: u64,
    pub outcomes: Vec<SourceOutcome>,
}

/// Fetch every source in order, one at a time
///
/// A failing source is recorded as [`SourceOutcome::Failed`] and contributes
/// no items; it never aborts the cycle and is not retried.
pub async fn aggregate_feeds<R: FeedRelay>(relay: &R, sources: &[String]) -> Vec<SourceOutcome> {
    let mut outcomes = Vec::with_capacity(sources.len());

    for source in sources {
        match relay.fetch_items(source).await {
            Ok(items) => {
                let total = items.len();
                let items = logic::feed::take_leading(items);
                log::debug!(
                    "feed: {} returned {} items, keeping {}",
                    source,
                    total,
                    items.len()
                );
                outcomes.push(SourceOutcome::Fetched {
                    source: source.clone(),
                    items,
                });
            }
            Err(e) => {
                let error_type = logic::errors::classify_error(&e);
                let message = logic::errors::format_error_message(&e);
                log::warn!("feed: {} failed ({:?}): {:#}", source, error_type, e);
                outcomes.push(SourceOutcome::Failed {
                    source: source.clone(),
                    error_type,
                    message,
                });
            }
        }
    }

    outcomes
}

/// Feed service worker; each request runs in its own task
struct FeedService<R: FeedRelay> {
    relay: Arc<R>,
    response_tx: mpsc::UnboundedSender<FeedResponse>,
}

impl<R: FeedRelay> FeedService<R> {
    fn new(relay: R, response_tx: mpsc::UnboundedSender<FeedResponse>) -> Self {
        Self {
            relay: Arc::new(relay),
            response_tx,
        }
    }

    /// Start a cycle without waiting for it; overlapping cycles are allowed
    /// and resolved by the receiver's token check
    fn dispatch(&self, request: FeedRequest) {
        let relay = Arc::clone(&self.relay);
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            log::debug!(
                "feed: cycle {} start ({} sources)",
                request.token,
                request.sources.len()
            );
            let outcomes = aggregate_feeds(relay.as_ref(), &request.sources).await;
            log::debug!(
                "feed: cycle {} done, {}/{} sources ok",
                request.token,
                logic::feed::count_ok(&outcomes),
                outcomes.len()
            );

            // Receiver gone means the app is shutting down
            let _ = response_tx.send(FeedResponse {
                token: request.token,
                outcomes,
            });
        });
    }
}

/// Spawn the feed service worker
pub fn spawn_feed_service<R: FeedRelay>(
    relay: R,
) -> (
    mpsc::UnboundedSender<FeedRequest>,
    mpsc::UnboundedReceiver<FeedResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FeedRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<FeedResponse>();

    tokio::spawn(async move {
        let service = FeedService::new(relay, response_tx);
        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        log::debug!("feed: request channel closed, service stopping");
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RelayItem;
    use crate::logic::errors::ErrorType;
    use anyhow::Result;

    struct EchoRelay;

    impl FeedRelay for EchoRelay {
        async fn fetch_items(&self, source: &str) -> Result<Vec<RelayItem>> {
            if source.contains("down") {
                anyhow::bail!("connection refused");
            }
            Ok((0..4)
                .map(|i| RelayItem {
                    guid: format!("{}#{}", source, i),
                    id: None,
                    title: format!("post {}", i),
                    link: format!("{}/{}", source, i),
                    description: String::new(),
                    pub_date: None,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_aggregate_keeps_order_and_caps_items() {
        let sources = vec!["https://a".to_string(), "https://down".to_string(), "https://b".to_string()];
        let outcomes = aggregate_feeds(&EchoRelay, &sources).await;

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].source(), "https://a");
        assert!(matches!(
            &outcomes[1],
            SourceOutcome::Failed { error_type: ErrorType::ConnectionRefused, .. }
        ));

        let items = logic::feed::flatten_outcomes(&outcomes);
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].id, "https://a#0");
        assert_eq!(items[3].id, "https://b#0");
    }

    #[tokio::test]
    async fn test_aggregate_no_sources() {
        let outcomes = aggregate_feeds(&EchoRelay, &[]).await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_service_echoes_token() {
        let (tx, mut rx) = spawn_feed_service(EchoRelay);
        tx.send(FeedRequest {
            token: 7,
            sources: vec!["https://a".to_string()],
        })
        .unwrap();

        let response = rx.recv().await.unwrap();
        assert_eq!(response.token, 7);
        assert_eq!(response.outcomes.len(), 1);
    }
}
