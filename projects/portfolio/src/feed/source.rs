use std::collections::BTreeSet;

use async_trait::async_trait;
use interfaces_github_repositories::index::{
    fetch_repository_languages, fetch_user_repositories, FetchRepositoryLanguagesError,
    FetchUserRepositoriesError, GitHubRestResult,
};
use interfaces_github_repositories::models::{LanguageBreakdown, RepositoryRecord};
use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Where the feed gets its two kinds of data from.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(&self, owner: &str) -> Result<Vec<RepositoryRecord>, FeedSourceError>;

    /// Only the language names are returned; byte counts are dropped.
    async fn repository_languages(&self, languages_url: &str) -> Result<BTreeSet<String>, FeedSourceError>;
}

#[derive(Debug, Error)]
pub enum FeedSourceError {
    #[error("BuildClient: {source}")]
    BuildClient {
        source: reqwest::Error,
    },

    #[error("FetchUserRepositories: {source}")]
    FetchUserRepositories {
        #[from]
        source: FetchUserRepositoriesError,
    },

    #[error("FetchRepositoryLanguages: {source}")]
    FetchRepositoryLanguages {
        #[from]
        source: FetchRepositoryLanguagesError,
    },

    #[error("Unexpected status {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },
}

pub struct GitHubSource {
    client: Client,
    api_base: String,
}

impl GitHubSource {
    pub fn new(api_base: &str, user_agent: &str) -> Result<Self, FeedSourceError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| FeedSourceError::BuildClient { source })?;

        Ok(Self { client, api_base: api_base.to_string() })
    }
}

fn successful_body(result: GitHubRestResult) -> Result<String, FeedSourceError> {
    let GitHubRestResult { body, status } = result;
    if !status.is_success() {
        return Err(FeedSourceError::UnexpectedStatus { status });
    }
    Ok(body)
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn list_repositories(&self, owner: &str) -> Result<Vec<RepositoryRecord>, FeedSourceError> {
        let result = fetch_user_repositories(&self.client, &self.api_base, owner).await?;
        let body = successful_body(result)?;
        let records: Vec<RepositoryRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }

    async fn repository_languages(&self, languages_url: &str) -> Result<BTreeSet<String>, FeedSourceError> {
        let result = fetch_repository_languages(&self.client, languages_url).await?;
        let body = successful_body(result)?;
        let breakdown: LanguageBreakdown = serde_json::from_str(&body)?;
        Ok(breakdown.into_keys().collect())
    }
}
