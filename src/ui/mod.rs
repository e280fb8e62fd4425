//! Widgets and styling

pub mod gallery;
pub mod search_bar;
pub mod theme;
