//! Character to LED chain renderer
//!
//! Each render is a full frame: the pixel buffer is rebuilt from scratch and
//! all 25 words are pushed, lit cells with the scaled color and unlit cells
//! with the zero word.

use super::buffer::PixelBuffer;
use super::color::{ChannelOrder, ColorWord, Intensity, Rgb};
use crate::config::MatrixConfig;
use crate::glyph::glyph_for_char;
use crate::traits::LedChain;

/// Renders digit glyphs onto the LED matrix
///
/// Owns the pixel buffer; nothing else writes to it.
#[derive(Debug, Clone)]
pub struct MatrixRenderer {
    buffer: PixelBuffer,
    color: Rgb,
    intensity: Intensity,
    order: ChannelOrder,
}

impl MatrixRenderer {
    /// Create a renderer with a fixed color, intensity and wire order
    pub const fn new(color: Rgb, intensity: Intensity, order: ChannelOrder) -> Self {
        Self {
            buffer: PixelBuffer::new(),
            color,
            intensity,
            order,
        }
    }

    /// Create a renderer from the `[matrix]` config section
    pub fn from_config(config: &MatrixConfig) -> Self {
        Self::new(config.color, config.intensity, config.channel_order)
    }

    /// Rebuild the pixel buffer for `character` and push it to `chain`
    ///
    /// ASCII digits show their glyph; every other byte blanks the matrix.
    pub fn render<C: LedChain>(&mut self, character: u8, chain: &mut C) {
        match glyph_for_char(character) {
            Some(glyph) => self.buffer.load(glyph),
            None => self.buffer.clear(),
        }

        let lit = self.color_word();
        for &on in self.buffer.cells() {
            let word = if on { lit } else { ColorWord::OFF };
            chain.push_word(word.bits());
        }
    }

    /// Word sent for a lit cell
    pub fn color_word(&self) -> ColorWord {
        ColorWord::encode(self.color, self.intensity, self.order)
    }

    /// Buffer contents after the last render
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

impl Default for MatrixRenderer {
    fn default() -> Self {
        Self::from_config(&MatrixConfig::default())
    }
}
