use std::collections::{BTreeMap, BTreeSet};

use crate::content::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// The slice of the hosting document the view is allowed to touch.
pub trait Document {
    fn set_title(&mut self, title: &str);

    /// Inserts or replaces the `<meta name=..>` tag with the given name.
    fn upsert_meta(&mut self, name: &str, content: &str);

    /// Class on the root element; every theme rule keys off it.
    fn set_root_class(&mut self, class: &str);

    fn scroll_into_view(&mut self, section: Section);

    fn add_key_listener(&mut self) -> ListenerId;

    fn remove_key_listener(&mut self, id: ListenerId);
}

/// In-process document used by the snapshot renderer and by tests.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    title: Option<String>,
    metas: BTreeMap<String, String>,
    root_class: Option<String>,
    scrolls: Vec<Section>,
    listeners: BTreeSet<ListenerId>,
    next_listener: u64,
}

impl HeadlessDocument {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas.get(name).map(String::as_str)
    }

    pub fn meta_count(&self) -> usize {
        self.metas.len()
    }

    pub fn root_class(&self) -> Option<&str> {
        self.root_class.as_deref()
    }

    pub fn scrolls(&self) -> &[Section] {
        &self.scrolls
    }

    pub fn key_listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Document for HeadlessDocument {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn upsert_meta(&mut self, name: &str, content: &str) {
        self.metas.insert(name.to_string(), content.to_string());
    }

    fn set_root_class(&mut self, class: &str) {
        self.root_class = Some(class.to_string());
    }

    fn scroll_into_view(&mut self, section: Section) {
        self.scrolls.push(section);
    }

    fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id);
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}
