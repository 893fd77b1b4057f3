//! Digit glyph table
//!
//! One 5x5 on/off pattern per decimal digit. Cells are stored row-major in
//! the order the LED chain is wired, so index 0 is the first LED to receive
//! a color word.

/// Matrix edge length in LEDs
pub const MATRIX_SIZE: usize = 5;

/// Number of cells (LEDs) in the matrix
pub const PIXEL_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Number of glyphs in the table (digits 0-9)
pub const DIGIT_COUNT: usize = 10;

/// A fixed 5x5 pixel pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pixels: [bool; PIXEL_COUNT],
}

impl Glyph {
    /// The all-off pattern used for characters without a glyph
    pub const BLANK: Self = Self {
        pixels: [false; PIXEL_COUNT],
    };

    /// Build a glyph from a row-major 0/1 array
    pub const fn from_bits(bits: [u8; PIXEL_COUNT]) -> Self {
        let mut pixels = [false; PIXEL_COUNT];
        let mut i = 0;
        while i < PIXEL_COUNT {
            pixels[i] = bits[i] != 0;
            i += 1;
        }
        Self { pixels }
    }

    /// Cells in render order
    pub const fn pixels(&self) -> &[bool; PIXEL_COUNT] {
        &self.pixels
    }

    #[cfg(test)]
    /// Number of lit cells
    pub(crate) fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }
}

#[rustfmt::skip]
static DIGITS: [Glyph; DIGIT_COUNT] = [
    // 0
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
    // 1
    Glyph::from_bits([
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 1, 0, 0,
        0, 1, 1, 0, 0,
        0, 0, 1, 0, 0,
    ]),
    // 2
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 1, 0, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
    // 3
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
    // 4
    Glyph::from_bits([
        0, 1, 0, 0, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 0, 1, 0,
    ]),
    // 5
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 1, 0, 0, 0,
        0, 1, 1, 1, 0,
    ]),
    // 6
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 1, 0, 0, 0,
        0, 1, 1, 1, 0,
    ]),
    // 7
    Glyph::from_bits([
        0, 0, 0, 1, 0,
        0, 1, 0, 0, 0,
        0, 0, 1, 0, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
    // 8
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
    // 9
    Glyph::from_bits([
        0, 1, 1, 1, 0,
        0, 0, 0, 1, 0,
        0, 1, 1, 1, 0,
        0, 1, 0, 1, 0,
        0, 1, 1, 1, 0,
    ]),
];

/// Look up the glyph for a digit value
///
/// Callers must pass a value in `0..=9`; anything larger is clamped to 9.
/// Use [`glyph_for_char`] when the input has not been validated.
pub fn lookup(digit: u8) -> &'static Glyph {
    let index = (digit as usize).min(DIGIT_COUNT - 1);
    &DIGITS[index]
}

/// Classify an input byte and return its glyph
///
/// ASCII digits map to their table entry; every other byte has no glyph.
pub fn glyph_for_char(character: u8) -> Option<&'static Glyph> {
    if character.is_ascii_digit() {
        Some(lookup(character - b'0'))
    } else {
        None
    }
}
