use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use interfaces_github_repositories::models::RepositoryRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub updated_at: DateTime<Utc>,
    pub star_count: u64,
    pub languages: BTreeSet<String>,
}

impl RepositorySummary {
    pub fn from_record(record: RepositoryRecord, languages: BTreeSet<String>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            url: record.html_url,
            updated_at: record.updated_at,
            star_count: record.stargazers_count,
            languages,
        }
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains(language)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub repository_count: usize,
    pub total_stars: u64,
}

impl FeedStats {
    /// Aggregates over exactly the records given, which the caller has already truncated.
    pub fn from_records(records: &[RepositoryRecord]) -> Self {
        Self {
            repository_count: records.len(),
            total_stars: records.iter().map(|record| record.stargazers_count).sum(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterState {
    #[default]
    All,
    Language(String),
}

impl FilterState {
    pub fn language(name: impl Into<String>) -> Self {
        FilterState::Language(name.into())
    }

    pub fn matches(&self, repository: &RepositorySummary) -> bool {
        match self {
            FilterState::All => true,
            FilterState::Language(language) => repository.has_language(language),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterState::All => "All",
            FilterState::Language(language) => language,
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterState::All => f.write_str("all"),
            FilterState::Language(language) => f.write_str(language),
        }
    }
}
