use flipbook_core::{BookLayout, ModeState, PageIndex, PageModeView};
use std::path::PathBuf;

/// Page position and the chrome derived from it.
pub struct BookState {
    pub(in crate::app) layout: BookLayout,
    pub(in crate::app) pages: Vec<PathBuf>,
    pub(in crate::app) current_page: PageIndex,
    pub(in crate::app) view: PageModeView,
    pub(in crate::app) mode: ModeState,
}

impl BookState {
    pub(in crate::app) fn new(pages: Vec<PathBuf>) -> Self {
        let layout = BookLayout::default();
        let current_page = PageIndex::COVER;
        let view = PageModeView::for_page(&layout, current_page);
        let mut mode = ModeState::default();
        mode.apply(view.mode);
        Self {
            layout,
            pages,
            current_page,
            view,
            mode,
        }
    }

    /// Move to a validated page and replace the active view mode.
    pub(in crate::app) fn show_page(&mut self, index: PageIndex) {
        self.current_page = index;
        self.view = PageModeView::for_page(&self.layout, index);
        self.mode.apply(self.view.mode);
    }

    pub(in crate::app) fn page_path(&self, index: PageIndex) -> Option<&PathBuf> {
        self.pages.get(index.get())
    }
}

#[cfg(test)]
mod tests {
    use super::BookState;
    use flipbook_core::{PageIndex, ViewMode};

    #[test]
    fn starts_on_the_cover() {
        let book = BookState::new(Vec::new());
        assert_eq!(book.current_page, PageIndex::COVER);
        assert_eq!(book.mode.active(), Some(ViewMode::Cover));
        assert!(!book.view.prev_enabled);
    }

    #[test]
    fn showing_a_page_swaps_the_mode() {
        let mut book = BookState::new(Vec::new());
        book.show_page(PageIndex::new(3).expect("valid page"));
        assert_eq!(book.mode.active(), Some(ViewMode::Back));
        assert!(!book.mode.is_active(ViewMode::Cover));
        assert!(!book.view.next_enabled);
    }
}
