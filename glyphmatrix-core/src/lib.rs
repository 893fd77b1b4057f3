//! Board-agnostic core logic for the glyphmatrix firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Digit glyph table for the 5x5 LED matrix
//! - Matrix rendering (pixel buffer + color word encoding)
//! - Button debouncing state machine and indicator outputs
//! - Status screen and log composition
//! - Shared single-writer cells between cores and tasks
//! - Board configuration types and parser
//! - Collaborator traits (display surface, LED chain, log sink)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![allow(async_fn_in_trait)]

pub mod config;
pub mod glyph;
pub mod input;
pub mod matrix;
pub mod shared;
pub mod status;
pub mod traits;

pub use glyph::{Glyph, DIGIT_COUNT, PIXEL_COUNT};
pub use matrix::{ChannelOrder, Intensity, MatrixRenderer, PixelBuffer, Rgb};
