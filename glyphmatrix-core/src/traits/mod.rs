//! Collaborator traits
//!
//! These traits define the interface between the rendering/status logic
//! and the hardware-specific implementations (OLED driver, LED chain
//! transport, log output).

pub mod display;
pub mod led_chain;
pub mod log;

pub use display::{DisplayError, DisplaySurface};
pub use led_chain::LedChain;
pub use log::LogSink;
