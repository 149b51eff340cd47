use std::collections::BTreeSet;

use crate::content::Section;

/// Fraction of a section's area that must be in view before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatcherState {
    #[default]
    Idle,
    Watching,
    Disposed,
}

/// Bounded watch list of reveal-tagged sections.
///
/// Revealing is one-way: a section stays visible whatever ratios are reported
/// afterwards. The list is fixed by the first `watch` call.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    state: WatcherState,
    watched: BTreeSet<Section>,
    visible: BTreeSet<Section>,
}

impl RevealTracker {
    pub fn watch(&mut self, sections: impl IntoIterator<Item = Section>) {
        if self.state != WatcherState::Idle {
            return;
        }
        self.watched.extend(sections);
        self.state = WatcherState::Watching;
    }

    /// Returns true when this report revealed the section.
    pub fn observe(&mut self, section: Section, ratio: f64) -> bool {
        if self.state != WatcherState::Watching || !self.watched.contains(&section) {
            return false;
        }
        if ratio.is_nan() || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.visible.insert(section)
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible.contains(&section)
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn dispose(&mut self) {
        self.watched.clear();
        self.state = WatcherState::Disposed;
    }
}
