use crate::book::{BookLayout, PageIndex};
use tracing::debug;

pub const COVER_LABEL: &str = "Couverture";
pub const SPREAD_LABEL: &str = "Intérieur (livre ouvert)";
pub const BACK_LABEL: &str = "Dos du livre";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    Cover,
    Spread,
    Back,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Cover, ViewMode::Spread, ViewMode::Back];

    pub fn class_name(self) -> &'static str {
        match self {
            ViewMode::Cover => "is-cover",
            ViewMode::Spread => "is-spread",
            ViewMode::Back => "is-back",
        }
    }
}

/// Everything the chrome around the book needs for one page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageModeView {
    pub mode: ViewMode,
    pub label: &'static str,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageModeView {
    pub fn for_page(layout: &BookLayout, index: PageIndex) -> Self {
        if layout.is_cover(index) {
            Self {
                mode: ViewMode::Cover,
                label: COVER_LABEL,
                prev_enabled: false,
                next_enabled: true,
            }
        } else if layout.is_back(index) {
            Self {
                mode: ViewMode::Back,
                label: BACK_LABEL,
                prev_enabled: true,
                next_enabled: false,
            }
        } else {
            Self {
                mode: ViewMode::Spread,
                label: SPREAD_LABEL,
                prev_enabled: true,
                next_enabled: true,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeChange {
    pub cleared: Vec<ViewMode>,
    pub applied: ViewMode,
}

/// The set of mode flags currently raised on the viewport.
///
/// Applying a mode lowers every flag before raising the new one, so at most
/// one flag is ever set after `apply` returns.
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    flags: Vec<ViewMode>,
}

impl ModeState {
    pub fn apply(&mut self, mode: ViewMode) -> ModeChange {
        let cleared = std::mem::take(&mut self.flags);
        self.flags.push(mode);
        debug!(mode = mode.class_name(), cleared = cleared.len(), "Applied view mode");
        ModeChange {
            cleared,
            applied: mode,
        }
    }

    pub fn active(&self) -> Option<ViewMode> {
        self.flags.first().copied()
    }

    pub fn is_active(&self, mode: ViewMode) -> bool {
        self.flags.contains(&mode)
    }
}
