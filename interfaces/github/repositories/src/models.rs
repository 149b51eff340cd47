use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of `GET /users/{owner}/repos`.
///
/// GitHub sends many more fields; only the ones the feed reads are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub updated_at: DateTime<Utc>,
    pub stargazers_count: u64,
    pub languages_url: String,
}

/// Body of a repository's `languages_url`: language name to byte count.
pub type LanguageBreakdown = BTreeMap<String, u64>;
