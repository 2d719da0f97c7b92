//! Core logic of the flipbook viewer, free of any GUI toolkit or audio
//! device: page geometry, the page-mode mapping and the music fade state
//! machine.

pub mod audio;
pub mod book;
pub mod page_mode;

pub use book::{BookLayout, PAGE_COUNT, PageError, PageIndex};
pub use page_mode::{ModeChange, ModeState, PageModeView, ViewMode};
