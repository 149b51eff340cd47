#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use interfaces_github_repositories::models::RepositoryRecord;
use projects_portfolio::feed::{FeedSourceError, RepositorySource};
use reqwest::StatusCode;

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600 + minute * 60, 0).unwrap()
}

pub fn languages_url(id: u64) -> String {
    format!("https://api.github.test/repos/someone/repo-{id}/languages")
}

pub fn record(id: u64, minute: i64, stars: u64) -> RepositoryRecord {
    RepositoryRecord {
        id,
        name: format!("repo-{id}"),
        description: Some(format!("Repository number {id}")),
        html_url: format!("https://github.com/someone/repo-{id}"),
        updated_at: at_minute(minute),
        stargazers_count: stars,
        languages_url: languages_url(id),
    }
}

/// In-memory stand-in for the GitHub API.
#[derive(Default)]
pub struct FakeSource {
    records: Option<Vec<RepositoryRecord>>,
    languages: HashMap<String, Vec<String>>,
    failing_languages: HashSet<String>,
    hold_list: bool,
    hold_languages: bool,
    list_calls: AtomicUsize,
    language_calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_records(records: Vec<RepositoryRecord>) -> Self {
        Self { records: Some(records), ..Self::default() }
    }

    /// Answers the list call with GitHub's rate-limit error object.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn languages(mut self, id: u64, languages: &[&str]) -> Self {
        self.languages.insert(
            languages_url(id),
            languages.iter().map(|language| language.to_string()).collect(),
        );
        self
    }

    pub fn failing_languages(mut self, id: u64) -> Self {
        self.failing_languages.insert(languages_url(id));
        self
    }

    pub fn hold_list(mut self) -> Self {
        self.hold_list = true;
        self
    }

    pub fn hold_languages(mut self) -> Self {
        self.hold_languages = true;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn language_calls(&self) -> usize {
        self.language_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for FakeSource {
    async fn list_repositories(&self, _owner: &str) -> Result<Vec<RepositoryRecord>, FeedSourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.hold_list {
            std::future::pending::<()>().await;
        }
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => {
                let body = r#"{"message": "API rate limit exceeded for 203.0.113.7."}"#;
                let source = serde_json::from_str::<Vec<RepositoryRecord>>(body).unwrap_err();
                Err(FeedSourceError::DeserializeResponseBody { source })
            }
        }
    }

    async fn repository_languages(&self, languages_url: &str) -> Result<BTreeSet<String>, FeedSourceError> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        if self.hold_languages {
            std::future::pending::<()>().await;
        }
        if self.failing_languages.contains(languages_url) {
            return Err(FeedSourceError::UnexpectedStatus { status: StatusCode::FORBIDDEN });
        }
        Ok(self
            .languages
            .get(languages_url)
            .map(|languages| languages.iter().cloned().collect())
            .unwrap_or_default())
    }
}
