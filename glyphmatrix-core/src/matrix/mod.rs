//! 5x5 matrix rendering
//!
//! Turns the current character into a pixel buffer and streams it to the
//! LED chain as packed color words.

pub mod buffer;
pub mod color;
pub mod renderer;

pub use buffer::PixelBuffer;
pub use color::{ChannelOrder, ColorWord, Intensity, Rgb};
pub use renderer::MatrixRenderer;
