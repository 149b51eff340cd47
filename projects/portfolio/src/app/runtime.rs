use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{update, Effect, Model, Msg};
use crate::content::{Section, PAGE_DESCRIPTION, PAGE_TITLE};
use crate::document::{Document, ListenerId};
use crate::feed::{load_feed, FeedOutcome, RepositorySource};
use crate::palette::KeyPress;
use crate::theme::store::ThemeStore;
use crate::theme::ThemePreference;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
}

/// Owns the model and every host handle for one mounted view.
///
/// Messages are applied one at a time through [`Runtime::dispatch`]. Results
/// of the background feed task queue up in an inbox and are applied only when
/// the host drains it with [`Runtime::pump`] or [`Runtime::next`]. After
/// [`Runtime::teardown`] the feed is cancelled, the inbox is closed and every
/// further message is ignored.
pub struct Runtime<T, D>
where
    T: ThemeStore,
    D: Document,
{
    model: Model,
    theme: ThemePreference<T>,
    document: D,
    inbox: mpsc::UnboundedReceiver<Msg>,
    cancel: CancellationToken,
    feed_task: Option<JoinHandle<FeedOutcome>>,
    key_listener: Option<ListenerId>,
    torn_down: bool,
}

impl<T, D> Runtime<T, D>
where
    T: ThemeStore,
    D: Document,
{
    /// Must be called from within a tokio runtime; the feed starts immediately.
    pub fn mount<S>(source: Arc<S>, account: impl Into<String>, theme_store: T, mut document: D) -> Self
    where
        S: RepositorySource + ?Sized + 'static,
    {
        let account = account.into();
        let theme = ThemePreference::new(theme_store);
        let model = Model::new(theme.get());
        let key_listener = document.add_key_listener();

        let (outbox, inbox) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let feed_cancel = cancel.clone();
        let feed_task = tokio::spawn(async move {
            load_feed(source.as_ref(), &account, &feed_cancel, |event| {
                let _ = outbox.send(Msg::Feed(event));
            })
            .await
        });

        let mut runtime = Self {
            model,
            theme,
            document,
            inbox,
            cancel,
            feed_task: Some(feed_task),
            key_listener: Some(key_listener),
            torn_down: false,
        };
        runtime.dispatch(Msg::Mounted);
        info!(theme = %runtime.model.theme, "portfolio view mounted");
        runtime
    }

    pub fn dispatch(&mut self, msg: Msg) -> DispatchOutcome {
        if self.torn_down {
            debug!(?msg, "ignoring message after teardown");
            return DispatchOutcome::default();
        }
        let effects = update(&mut self.model, msg);
        self.run_effects(effects)
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> DispatchOutcome {
        let mut outcome = DispatchOutcome::default();
        for effect in effects {
            match effect {
                Effect::PageMetadata => {
                    self.document.set_title(PAGE_TITLE);
                    self.document.upsert_meta("description", PAGE_DESCRIPTION);
                }
                Effect::ThemeChanged(theme) => self.theme.set(theme, &mut self.document),
                Effect::ScrollIntoView(section) => self.document.scroll_into_view(section),
                Effect::PreventDefault => outcome.default_prevented = true,
            }
        }
        outcome
    }

    /// Entry point of the global key listener. Presses arriving without a
    /// registered listener are dropped.
    pub fn key_down(&mut self, press: KeyPress) -> DispatchOutcome {
        if self.key_listener.is_none() {
            return DispatchOutcome::default();
        }
        self.dispatch(Msg::KeyPressed(press))
    }

    pub fn report_intersections(&mut self, reports: impl IntoIterator<Item = (Section, f64)>) {
        for (section, ratio) in reports {
            self.dispatch(Msg::SectionIntersected { section, ratio });
        }
    }

    /// Applies every queued message without waiting. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.inbox.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Waits for the next queued message and applies it. Returns false once
    /// nothing more can arrive.
    pub async fn next(&mut self) -> bool {
        match self.inbox.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Applies queued messages until the repository feed has settled.
    pub async fn settle_feed(&mut self) {
        while !self.model.feed.is_settled() {
            if !self.next().await {
                break;
            }
        }
    }

    /// Abandons the feed, drops the key listener and disposes the reveal
    /// watcher. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel.cancel();
        if let Some(task) = self.feed_task.take() {
            task.abort();
        }
        self.inbox.close();
        if let Some(listener) = self.key_listener.take() {
            self.document.remove_key_listener(listener);
        }
        self.dispatch(Msg::TornDown);
        self.torn_down = true;
        info!("portfolio view torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn theme_store(&self) -> &T {
        self.theme.store()
    }
}

impl<T, D> Drop for Runtime<T, D>
where
    T: ThemeStore,
    D: Document,
{
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
