use reqwest::{header, Client, StatusCode};
use thiserror::Error;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

pub async fn fetch_user_repositories(
    client: &Client,
    api_base: &str,
    owner: &str,
) -> Result<GitHubRestResult, FetchUserRepositoriesError> {
    let url = format!("{}/users/{owner}/repos", api_base.trim_end_matches('/'));

    let response = client
        .get(&url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|source| FetchUserRepositoriesError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchUserRepositoriesError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchUserRepositoriesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

/// `languages_url` comes straight from a repository record, so it is used as is.
pub async fn fetch_repository_languages(
    client: &Client,
    languages_url: &str,
) -> Result<GitHubRestResult, FetchRepositoryLanguagesError> {
    let response = client
        .get(languages_url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
        .map_err(|source| FetchRepositoryLanguagesError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchRepositoryLanguagesError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchRepositoryLanguagesError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
