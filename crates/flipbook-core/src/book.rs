//! Page geometry of the booklet: how many pages it has, which of them are the
//! interior spread, and how navigation moves between them.

use thiserror::Error;

/// Pages in the booklet: cover, two interior pages, back cover.
pub const PAGE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page index {index} is outside 0..{page_count}")]
    OutOfRange { index: usize, page_count: usize },
}

/// A page position that is known to lie inside the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageIndex(usize);

impl PageIndex {
    pub const COVER: PageIndex = PageIndex(0);

    pub fn new(index: usize) -> Result<Self, PageError> {
        BookLayout::default().page(index)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLayout {
    page_count: usize,
}

impl Default for BookLayout {
    fn default() -> Self {
        Self {
            page_count: PAGE_COUNT,
        }
    }
}

impl BookLayout {
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Validate a raw index coming from the page viewer.
    pub fn page(&self, index: usize) -> Result<PageIndex, PageError> {
        if index < self.page_count {
            Ok(PageIndex(index))
        } else {
            Err(PageError::OutOfRange {
                index,
                page_count: self.page_count,
            })
        }
    }

    pub fn last(&self) -> PageIndex {
        PageIndex(self.page_count - 1)
    }

    pub fn is_cover(&self, index: PageIndex) -> bool {
        index.0 == 0
    }

    pub fn is_back(&self, index: PageIndex) -> bool {
        index == self.last()
    }

    /// Interior pages are the ones shown while the book lies open.
    pub fn is_interior(&self, index: PageIndex) -> bool {
        !self.is_cover(index) && !self.is_back(index)
    }

    pub fn next(&self, index: PageIndex) -> Option<PageIndex> {
        if self.is_back(index) {
            None
        } else {
            Some(PageIndex(index.0 + 1))
        }
    }

    pub fn previous(&self, index: PageIndex) -> Option<PageIndex> {
        index.0.checked_sub(1).map(PageIndex)
    }

    /// Pages visible at a given position. The interior pages are shown
    /// together as one spread.
    pub fn visible_pages(&self, index: PageIndex) -> Vec<PageIndex> {
        if self.is_interior(index) {
            (1..self.page_count - 1).map(PageIndex).collect()
        } else {
            vec![index]
        }
    }
}
