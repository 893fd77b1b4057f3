//! Matrix pixel buffer

use crate::glyph::{Glyph, PIXEL_COUNT};

/// Current on/off state of every matrix cell, in chain order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelBuffer {
    cells: [bool; PIXEL_COUNT],
}

impl PixelBuffer {
    /// All cells off
    pub const fn new() -> Self {
        Self {
            cells: [false; PIXEL_COUNT],
        }
    }

    /// Replace the whole buffer with a glyph
    pub fn load(&mut self, glyph: &Glyph) {
        self.cells = *glyph.pixels();
    }

    /// Switch every cell off
    pub fn clear(&mut self) {
        self.cells = [false; PIXEL_COUNT];
    }

    /// Cells in chain order
    pub fn cells(&self) -> &[bool; PIXEL_COUNT] {
        &self.cells
    }

    #[cfg(test)]
    /// Whether no cell is lit
    pub(crate) fn is_blank(&self) -> bool {
        !self.cells.iter().any(|&on| on)
    }

    #[cfg(test)]
    /// Whether the buffer shows exactly this glyph
    pub(crate) fn matches(&self, glyph: &Glyph) -> bool {
        self.cells == *glyph.pixels()
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::lookup;

    #[test]
    fn test_new_is_blank() {
        assert!(PixelBuffer::new().is_blank());
    }

    #[test]
    fn test_load_replaces_previous_glyph() {
        let mut buffer = PixelBuffer::new();
        buffer.load(lookup(8));
        buffer.load(lookup(1));
        assert!(buffer.matches(lookup(1)));
        assert!(!buffer.matches(lookup(8)));
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::new();
        buffer.load(lookup(0));
        buffer.clear();
        assert!(buffer.is_blank());
    }
}
