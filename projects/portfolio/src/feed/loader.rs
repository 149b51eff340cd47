use std::collections::BTreeSet;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::models::{FeedStats, RepositorySummary};
use super::ranking::{rank_repositories, FEED_LIMIT};
use super::source::RepositorySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// The list phase finished; stats cover the kept repositories only.
    Listed(FeedStats),
    /// Every language lookup settled. Empty when the list phase failed.
    Settled(Vec<RepositorySummary>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    Loaded,
    Unavailable,
    Cancelled,
}

/// Runs both feed phases, publishing progress through `publish`.
///
/// Nothing is published once `cancel` fires. A failed list leaves the stats
/// untouched and settles with an empty list; a failed language lookup empties
/// that repository's language set and nothing else.
pub async fn load_feed<S, F>(
    source: &S,
    owner: &str,
    cancel: &CancellationToken,
    mut publish: F,
) -> FeedOutcome
where
    S: RepositorySource + ?Sized,
    F: FnMut(FeedEvent),
{
    let listed = tokio::select! {
        _ = cancel.cancelled() => {
            debug!(owner, "feed cancelled while listing repositories");
            return FeedOutcome::Cancelled;
        }
        listed = source.list_repositories(owner) => listed,
    };

    let records = match listed {
        Ok(records) => records,
        Err(error) => {
            warn!(owner, %error, "repository list unavailable");
            if cancel.is_cancelled() {
                return FeedOutcome::Cancelled;
            }
            publish(FeedEvent::Settled(Vec::new()));
            return FeedOutcome::Unavailable;
        }
    };

    let fetched = records.len();
    let kept = rank_repositories(records, FEED_LIMIT);
    let stats = FeedStats::from_records(&kept);
    info!(
        owner,
        fetched,
        kept = stats.repository_count,
        stars = stats.total_stars,
        "repositories listed"
    );
    if cancel.is_cancelled() {
        return FeedOutcome::Cancelled;
    }
    publish(FeedEvent::Listed(stats));

    let lookups = kept
        .iter()
        .map(|record| source.repository_languages(&record.languages_url));

    let languages = tokio::select! {
        _ = cancel.cancelled() => {
            debug!(owner, "feed cancelled while resolving languages");
            return FeedOutcome::Cancelled;
        }
        languages = join_all(lookups) => languages,
    };

    let summaries: Vec<RepositorySummary> = kept
        .into_iter()
        .zip(languages)
        .map(|(record, languages)| {
            let languages = languages.unwrap_or_else(|error| {
                warn!(repository = %record.name, %error, "languages unavailable");
                BTreeSet::new()
            });
            RepositorySummary::from_record(record, languages)
        })
        .collect();

    debug!(owner, repositories = summaries.len(), "feed settled");
    publish(FeedEvent::Settled(summaries));
    FeedOutcome::Loaded
}
