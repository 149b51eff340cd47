//! Repository feed: list the account's repositories, keep the most recently
//! updated ones, then resolve each kept repository's languages.

pub mod loader;
pub mod models;
pub mod ranking;
pub mod source;

pub use loader::{load_feed, FeedEvent, FeedOutcome};
pub use models::{FeedStats, FilterState, RepositorySummary};
pub use ranking::{filter_repositories, observed_languages, rank_repositories, FEED_LIMIT};
pub use source::{FeedSourceError, GitHubSource, RepositorySource};
