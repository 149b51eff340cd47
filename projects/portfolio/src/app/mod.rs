//! Model, transitions and effects of the portfolio view.
//!
//! `update` is the only place the model changes. Anything that has to reach
//! the outside world (storage, document, scrolling, event default handling) is
//! returned as an [`Effect`] and carried out by the [`runtime::Runtime`].

pub mod runtime;

use crate::content::{AvatarSource, Section};
use crate::feed::{filter_repositories, observed_languages, FeedEvent, FeedStats, FilterState, RepositorySummary};
use crate::palette::{KeyPress, PaletteAction, PaletteClick, PaletteState};
use crate::reveal::RevealTracker;
use crate::theme::ThemeSetting;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Pending,
    Settled(Vec<RepositorySummary>),
}

impl FeedState {
    pub fn is_settled(&self) -> bool {
        matches!(self, FeedState::Settled(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    pub theme: ThemeSetting,
    pub feed: FeedState,
    pub stats: FeedStats,
    pub filter: FilterState,
    pub palette: PaletteState,
    pub reveal: RevealTracker,
    pub avatar: AvatarSource,
}

impl Model {
    pub fn new(theme: ThemeSetting) -> Self {
        Self { theme, ..Self::default() }
    }

    /// The kept repositories, empty until the feed settles.
    pub fn repositories(&self) -> &[RepositorySummary] {
        match &self.feed {
            FeedState::Pending => &[],
            FeedState::Settled(repositories) => repositories,
        }
    }

    pub fn visible_repositories(&self) -> Vec<&RepositorySummary> {
        filter_repositories(self.repositories(), &self.filter)
    }

    /// `All` followed by every language observed in the kept repositories.
    pub fn filter_options(&self) -> Vec<FilterState> {
        std::iter::once(FilterState::All)
            .chain(observed_languages(self.repositories()).into_iter().map(FilterState::Language))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Mounted,
    TornDown,
    ThemeToggled,
    ThemeSelected(ThemeSetting),
    Feed(FeedEvent),
    FilterSelected(FilterState),
    KeyPressed(KeyPress),
    PaletteClicked(PaletteClick),
    SectionIntersected { section: Section, ratio: f64 },
    AvatarLoadFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Set the document title and description meta tag.
    PageMetadata,
    /// Persist the theme and apply it to the document root.
    ThemeChanged(ThemeSetting),
    ScrollIntoView(Section),
    /// Stop the host's default handling of the event being dispatched.
    PreventDefault,
}

pub fn update(model: &mut Model, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Mounted => {
            model.reveal.watch(Section::ALL);
            vec![Effect::PageMetadata, Effect::ThemeChanged(model.theme)]
        }
        Msg::TornDown => {
            model.reveal.dispose();
            model.palette.close();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = model.theme.toggled();
            set_theme(model, theme)
        }
        Msg::ThemeSelected(theme) => set_theme(model, theme),
        Msg::Feed(FeedEvent::Listed(stats)) => {
            model.stats = stats;
            Vec::new()
        }
        Msg::Feed(FeedEvent::Settled(repositories)) => {
            model.feed = FeedState::Settled(repositories);
            Vec::new()
        }
        Msg::FilterSelected(filter) => {
            model.filter = filter;
            Vec::new()
        }
        Msg::KeyPressed(press) => {
            if !press.is_palette_toggle() {
                return Vec::new();
            }
            model.palette.toggle();
            vec![Effect::PreventDefault]
        }
        Msg::PaletteClicked(click) => {
            if !model.palette.is_open() {
                return Vec::new();
            }
            match click {
                PaletteClick::Overlay => {
                    model.palette.close();
                    Vec::new()
                }
                PaletteClick::Panel => Vec::new(),
                PaletteClick::Action(PaletteAction::ToggleTheme) => {
                    let theme = model.theme.toggled();
                    set_theme(model, theme)
                }
                PaletteClick::Action(action) => action
                    .target()
                    .map(Effect::ScrollIntoView)
                    .into_iter()
                    .collect(),
            }
        }
        Msg::SectionIntersected { section, ratio } => {
            model.reveal.observe(section, ratio);
            Vec::new()
        }
        Msg::AvatarLoadFailed => {
            model.avatar = AvatarSource::Placeholder;
            Vec::new()
        }
    }
}

fn set_theme(model: &mut Model, theme: ThemeSetting) -> Vec<Effect> {
    model.theme = theme;
    vec![Effect::ThemeChanged(theme)]
}
