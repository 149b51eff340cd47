//! Single-page portfolio view with a live GitHub repository feed
//!
//! - `app` holds the model, the named transitions and the runtime that drives them
//! - `feed` fetches, ranks and filters the repository list
//! - `theme`, `reveal` and `palette` are the small client-side behaviours
//! - `document` abstracts the browser surface the view touches
//! - `view` renders the model to an HTML document

pub mod app;
pub mod config;
pub mod content;
pub mod document;
pub mod feed;
pub mod palette;
pub mod reveal;
pub mod theme;
pub mod view;
