//! Raw GitHub REST calls used by the portfolio repository feed
//!
//! - `index` sends the requests and hands back the untouched body and status
//! - `models` holds the serde shapes of the repository list and language map

pub mod index;
pub mod models;
