//! Push-button input handling

pub mod debounce;
pub mod indicators;

pub use debounce::{ButtonId, ButtonPanel, Debouncer, Edge, Toggle, DEBOUNCE_WINDOW_US};
pub use indicators::Indicators;
