use std::collections::BTreeSet;

use interfaces_github_repositories::models::RepositoryRecord;

use super::models::{FilterState, RepositorySummary};

/// The feed never shows more than this many repositories.
pub const FEED_LIMIT: usize = 6;

/// Most recently updated first; equal timestamps fall back to ascending id.
pub fn rank_repositories(mut records: Vec<RepositoryRecord>, limit: usize) -> Vec<RepositoryRecord> {
    records.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    records.truncate(limit);
    records
}

pub fn filter_repositories<'a>(
    repositories: &'a [RepositorySummary],
    filter: &FilterState,
) -> Vec<&'a RepositorySummary> {
    repositories
        .iter()
        .filter(|repository| filter.matches(repository))
        .collect()
}

/// Every language seen across the kept repositories, sorted and deduplicated.
pub fn observed_languages(repositories: &[RepositorySummary]) -> Vec<String> {
    repositories
        .iter()
        .flat_map(|repository| repository.languages.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
