mod common;

use std::sync::Arc;

use common::{record, FakeSource};
use pretty_assertions::assert_eq;
use projects_portfolio::app::runtime::Runtime;
use projects_portfolio::app::Msg;
use projects_portfolio::content::{Section, PAGE_DESCRIPTION, PAGE_TITLE};
use projects_portfolio::document::HeadlessDocument;
use projects_portfolio::feed::{FeedStats, FilterState};
use projects_portfolio::palette::{KeyPress, PaletteAction, PaletteClick};
use projects_portfolio::reveal::WatcherState;
use projects_portfolio::theme::store::MemoryThemeStore;
use projects_portfolio::theme::ThemeSetting;

type TestRuntime = Runtime<MemoryThemeStore, HeadlessDocument>;

fn mount(source: Arc<FakeSource>, store: MemoryThemeStore) -> TestRuntime {
    Runtime::mount(source, "someone", store, HeadlessDocument::default())
}

fn feed_source() -> Arc<FakeSource> {
    Arc::new(
        FakeSource::with_records(vec![record(1, 0, 4), record(2, 5, 6), record(3, 10, 1)])
            .languages(1, &["Shell", "HCL"])
            .languages(2, &["JavaScript", "CSS"])
            .languages(3, &["Shell"]),
    )
}

#[tokio::test]
async fn mount_applies_persisted_theme_and_page_metadata() -> anyhow::Result<()> {
    let runtime = mount(feed_source(), MemoryThemeStore::with_value("light"));

    assert_eq!(runtime.model().theme, ThemeSetting::Light);
    assert_eq!(runtime.document().root_class(), Some("light"));
    assert_eq!(runtime.document().title(), Some(PAGE_TITLE));
    assert_eq!(runtime.document().meta("description"), Some(PAGE_DESCRIPTION));
    assert_eq!(runtime.document().key_listener_count(), 1);
    assert_eq!(runtime.theme_store().writes(), 1);
    Ok(())
}

#[tokio::test]
async fn invalid_stored_theme_falls_back_to_dark() {
    let runtime = mount(feed_source(), MemoryThemeStore::with_value("solarized"));

    assert_eq!(runtime.model().theme, ThemeSetting::Dark);
    assert_eq!(runtime.theme_store().value(), Some("dark"));
}

#[tokio::test]
async fn remounting_does_not_duplicate_description_meta() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());

    runtime.dispatch(Msg::Mounted);

    assert_eq!(runtime.document().meta_count(), 1);
}

#[tokio::test]
async fn toggling_theme_twice_restores_persisted_value() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::with_value("dark"));

    runtime.dispatch(Msg::ThemeToggled);
    assert_eq!(runtime.theme_store().value(), Some("light"));
    assert_eq!(runtime.document().root_class(), Some("light"));

    runtime.dispatch(Msg::ThemeToggled);
    assert_eq!(runtime.theme_store().value(), Some("dark"));
    assert_eq!(runtime.document().root_class(), Some("dark"));

    runtime.dispatch(Msg::ThemeSelected(ThemeSetting::Light));
    assert_eq!(runtime.theme_store().value(), Some("light"));
}

#[tokio::test]
async fn palette_shortcut_is_intercepted() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());

    let outcome = runtime.key_down(KeyPress::new("k").with_ctrl());
    assert!(outcome.default_prevented);
    assert!(runtime.model().palette.is_open());

    let outcome = runtime.key_down(KeyPress::new("p").with_ctrl());
    assert!(!outcome.default_prevented);
    assert!(runtime.model().palette.is_open());
}

#[tokio::test]
async fn palette_clicks_follow_panel_boundary() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());
    runtime.key_down(KeyPress::new("k").with_meta());

    runtime.dispatch(Msg::PaletteClicked(PaletteClick::Panel));
    runtime.dispatch(Msg::PaletteClicked(PaletteClick::Action(PaletteAction::GoToProjects)));
    runtime.dispatch(Msg::PaletteClicked(PaletteClick::Action(PaletteAction::GoToContact)));
    assert!(runtime.model().palette.is_open());
    assert_eq!(runtime.document().scrolls(), &[Section::Work, Section::Contact]);

    runtime.dispatch(Msg::PaletteClicked(PaletteClick::Overlay));
    assert!(!runtime.model().palette.is_open());
}

#[tokio::test]
async fn feed_settles_and_filters_without_refetching() {
    let source = feed_source();
    let mut runtime = mount(Arc::clone(&source), MemoryThemeStore::default());

    runtime.settle_feed().await;

    assert_eq!(runtime.model().stats, FeedStats { repository_count: 3, total_stars: 11 });
    assert_eq!(source.list_calls(), 1);
    assert_eq!(source.language_calls(), 3);

    runtime.dispatch(Msg::FilterSelected(FilterState::language("Shell")));
    let shell: Vec<u64> = runtime.model().visible_repositories().iter().map(|r| r.id).collect();
    assert_eq!(shell, vec![3, 1]);

    runtime.dispatch(Msg::FilterSelected(FilterState::language("Rust")));
    assert!(runtime.model().visible_repositories().is_empty());

    runtime.dispatch(Msg::FilterSelected(FilterState::All));
    assert_eq!(runtime.model().visible_repositories().len(), 3);

    assert_eq!(source.list_calls(), 1);
    assert_eq!(source.language_calls(), 3);
}

#[tokio::test]
async fn filter_options_come_from_kept_repositories() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());
    runtime.settle_feed().await;

    assert_eq!(
        runtime.model().filter_options(),
        vec![
            FilterState::All,
            FilterState::language("CSS"),
            FilterState::language("HCL"),
            FilterState::language("JavaScript"),
            FilterState::language("Shell"),
        ]
    );
}

#[tokio::test]
async fn revealed_sections_stay_visible() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());

    runtime.report_intersections([(Section::Career, 0.25), (Section::Contact, 0.1)]);
    runtime.report_intersections([(Section::Career, 0.0)]);

    assert!(runtime.model().reveal.is_visible(Section::Career));
    assert!(!runtime.model().reveal.is_visible(Section::Contact));
}

#[tokio::test]
async fn teardown_releases_listener_and_watcher() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());
    runtime.report_intersections([(Section::Hero, 1.0)]);

    runtime.teardown();
    runtime.teardown();

    assert!(runtime.is_torn_down());
    assert_eq!(runtime.document().key_listener_count(), 0);
    assert_eq!(runtime.model().reveal.state(), WatcherState::Disposed);
    assert!(runtime.model().reveal.is_visible(Section::Hero));

    let outcome = runtime.key_down(KeyPress::new("k").with_ctrl());
    assert!(!outcome.default_prevented);
    assert!(!runtime.model().palette.is_open());
}

#[tokio::test]
async fn teardown_abandons_in_flight_feed() {
    let source = Arc::new(FakeSource::with_records(vec![record(1, 0, 9)]).hold_languages());
    let mut runtime = mount(Arc::clone(&source), MemoryThemeStore::default());

    // Let the feed publish its stats and block on the language lookups.
    assert!(runtime.next().await);
    assert_eq!(runtime.model().stats.total_stars, 9);

    runtime.teardown();

    assert!(!runtime.next().await);
    assert!(!runtime.model().feed.is_settled());
    assert!(runtime.model().repositories().is_empty());
}

#[tokio::test]
async fn unavailable_feed_leaves_zero_stats_and_empty_grid() {
    let mut runtime = mount(Arc::new(FakeSource::unavailable()), MemoryThemeStore::default());

    runtime.settle_feed().await;

    assert!(runtime.model().feed.is_settled());
    assert_eq!(runtime.model().stats, FeedStats::default());
    assert!(runtime.model().repositories().is_empty());
}

#[tokio::test]
async fn pump_applies_only_what_has_already_arrived() {
    let mut runtime = mount(feed_source(), MemoryThemeStore::default());

    // The feed task has not been polled yet on this single-threaded runtime.
    assert_eq!(runtime.pump(), 0);
    assert!(!runtime.model().feed.is_settled());

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    assert_eq!(runtime.pump(), 2);
    assert!(runtime.model().feed.is_settled());
    assert_eq!(runtime.model().stats, FeedStats { repository_count: 3, total_stars: 11 });
    assert_eq!(runtime.pump(), 0);
}
