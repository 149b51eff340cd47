use crate::content::Section;

/// A key-down event as the host reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), ctrl: false, meta: false }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl+K or Cmd+K.
    pub fn is_palette_toggle(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "k"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    ToggleTheme,
    GoToProjects,
    GoToContact,
}

impl PaletteAction {
    pub const ALL: [PaletteAction; 3] = [
        PaletteAction::ToggleTheme,
        PaletteAction::GoToProjects,
        PaletteAction::GoToContact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaletteAction::ToggleTheme => "Toggle Theme",
            PaletteAction::GoToProjects => "Go to Projects",
            PaletteAction::GoToContact => "Contact",
        }
    }

    pub fn target(&self) -> Option<Section> {
        match self {
            PaletteAction::ToggleTheme => None,
            PaletteAction::GoToProjects => Some(Section::Work),
            PaletteAction::GoToContact => Some(Section::Contact),
        }
    }
}

/// Where a click inside the open palette landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteClick {
    /// The dimmed overlay around the panel.
    Overlay,
    /// The panel itself, outside any action button.
    Panel,
    Action(PaletteAction),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteState {
    open: bool,
}

impl PaletteState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
