//! Color scaling and LED chain word packing

use smart_leds::RGB8;

/// An unscaled 8-bit-per-channel color, from the `smart_leds` crate
pub type Rgb = RGB8;

/// Brightness multiplier applied before transmission
///
/// Stored as a whole percentage (0-100) so scaling is exact integer math:
/// `channel * percent / 100`, rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Intensity(u8);

impl Intensity {
    /// Full brightness
    pub const FULL: Self = Self(100);

    /// 10% brightness, used for the matrix by default
    pub const TENTH: Self = Self(10);

    /// Create from a percentage, clamped to 100
    pub const fn from_percent(percent: u8) -> Self {
        if percent > 100 {
            Self(100)
        } else {
            Self(percent)
        }
    }

    /// Percentage value (0-100)
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Scale one channel value
    pub const fn scale(self, channel: u8) -> u8 {
        // 255 * 100 / 100 fits in u8 again
        ((channel as u16 * self.0 as u16) / 100) as u8
    }

    /// Scale every channel of a color
    pub fn apply(self, color: Rgb) -> Rgb {
        Rgb::new(self.scale(color.r), self.scale(color.g), self.scale(color.b))
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::TENTH
    }
}

/// Byte order expected on the LED chain wire
///
/// WS2812-family chips clock in green first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    /// Green, red, blue (WS2812, SK6812)
    #[default]
    Grb,
    /// Red, green, blue (WS2811 variants)
    Rgb,
}

impl ChannelOrder {
    /// Parse a config string (`"grb"` or `"rgb"`, case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("grb") {
            Some(Self::Grb)
        } else if name.eq_ignore_ascii_case("rgb") {
            Some(Self::Rgb)
        } else {
            None
        }
    }

    /// Pack a color into a 24-bit word, first transmitted byte in bits 23..16
    pub fn pack(self, color: Rgb) -> u32 {
        let (first, second, third) = match self {
            ChannelOrder::Grb => (color.g, color.r, color.b),
            ChannelOrder::Rgb => (color.r, color.g, color.b),
        };
        ((first as u32) << 16) | ((second as u32) << 8) | (third as u32)
    }
}

/// Packed 24-bit color word ready for the LED chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorWord(u32);

impl ColorWord {
    /// The word that switches an LED off
    pub const OFF: Self = Self(0);

    /// Scale a color and pack it in the given wire order
    pub fn encode(color: Rgb, intensity: Intensity, order: ChannelOrder) -> Self {
        Self(order.pack(intensity.apply(color)))
    }

    /// Raw 24-bit value (upper byte always zero)
    pub const fn bits(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tenth_of_magenta() {
        let scaled = Intensity::TENTH.apply(Rgb::new(191, 0, 191));
        assert_eq!(scaled, Rgb::new(19, 0, 19));
    }

    #[test]
    fn test_grb_packing() {
        let word = ChannelOrder::Grb.pack(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(word, 0x34_12_56);
    }

    #[test]
    fn test_rgb_packing() {
        let word = ChannelOrder::Rgb.pack(Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(word, 0x12_34_56);
    }

    #[test]
    fn test_red_lands_in_its_own_byte() {
        // Red must survive packing; a bogus shift would drop it entirely
        let word = ColorWord::encode(Rgb::new(255, 0, 0), Intensity::FULL, ChannelOrder::Grb);
        assert_eq!(word.bits(), 0x00_FF_00);
    }

    #[test]
    fn test_intensity_clamped() {
        assert_eq!(Intensity::from_percent(250).percent(), 100);
        assert_eq!(Intensity::from_percent(0).scale(255), 0);
    }

    #[test]
    fn test_channel_order_names() {
        assert_eq!(ChannelOrder::from_name("GRB"), Some(ChannelOrder::Grb));
        assert_eq!(ChannelOrder::from_name("rgb"), Some(ChannelOrder::Rgb));
        assert_eq!(ChannelOrder::from_name("bgr"), None);
    }

    proptest! {
        #[test]
        fn prop_scaling_is_floor_of_product(channel in any::<u8>(), percent in 0u8..=100) {
            let scaled = Intensity::from_percent(percent).scale(channel);
            let expected = (channel as u32 * percent as u32) / 100;
            prop_assert_eq!(scaled as u32, expected);
        }

        #[test]
        fn prop_scaling_is_monotonic(a in any::<u8>(), b in any::<u8>(), percent in 0u8..=100) {
            let intensity = Intensity::from_percent(percent);
            if a <= b {
                prop_assert!(intensity.scale(a) <= intensity.scale(b));
            }
        }

        #[test]
        fn prop_packed_word_fits_24_bits(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let word = ColorWord::encode(Rgb::new(r, g, b), Intensity::FULL, ChannelOrder::Grb);
            prop_assert_eq!(word.bits() & 0xFF00_0000, 0);
        }
    }
}
