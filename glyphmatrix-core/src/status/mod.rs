//! Status screen and log composition

pub mod presenter;

pub use presenter::{StatusPresenter, StatusReport};
