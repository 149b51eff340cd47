use std::path::PathBuf;
use std::sync::Arc;

use projects_portfolio::app::runtime::Runtime;
use projects_portfolio::config::{ConfigError, PortfolioConfig};
use projects_portfolio::content::Section;
use projects_portfolio::document::HeadlessDocument;
use projects_portfolio::feed::{FeedSourceError, GitHubSource};
use projects_portfolio::theme::store::FileThemeStore;
use projects_portfolio::view::{render, ViewContext};
use thiserror::Error;
use tracing::{info, warn};
use utils_trace::{tracing_init, TracingInitError};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: TracingInitError,
	},
	#[error("FeedSource: {source}")]
	FeedSource {
		#[source]
		source: FeedSourceError,
	},
	#[error("WriteOutput {path}: {source}")]
	WriteOutput {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let config = PortfolioConfig::from_env()
		.map_err(|source| MainError::Config { source })?;

	tracing_init(&config.log_level, config.log_format)
		.map_err(|source| MainError::TracingInit { source })?;

	let source = GitHubSource::new(&config.api_base, &config.user_agent)
		.map_err(|source| MainError::FeedSource { source })?;

	let mut runtime = Runtime::mount(
		Arc::new(source),
		config.account.clone(),
		FileThemeStore::new(&config.theme_path),
		HeadlessDocument::default(),
	);

	let interrupted = tokio::select! {
		_ = runtime.settle_feed() => false,
		_ = tokio::signal::ctrl_c() => true,
	};

	if interrupted {
		warn!("interrupted before the repository feed settled");
		runtime.teardown();
		return Ok(());
	}

	// A headless viewport holds the whole page at once.
	runtime.report_intersections(Section::ALL.map(|section| (section, 1.0)));

	let html = render(runtime.model(), &ViewContext::now());
	tokio::fs::write(&config.output_path, html)
		.await
		.map_err(|source| MainError::WriteOutput { path: config.output_path.clone(), source })?;

	info!(
		path = %config.output_path.display(),
		repositories = runtime.model().repositories().len(),
		"portfolio rendered"
	);

	runtime.teardown();

	Ok(())
}
