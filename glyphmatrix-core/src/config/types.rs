//! Configuration type definitions
//!
//! Every field has a default matching the reference board, so an empty
//! config file yields a working setup.

use crate::input::DEBOUNCE_WINDOW_US;
use crate::matrix::{ChannelOrder, Intensity, Rgb};

/// Default SSD1306 I2C address
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x3C;

/// LED matrix color settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Color of lit cells before scaling
    pub color: Rgb,
    /// Brightness applied to `color`
    pub intensity: Intensity,
    /// Byte order on the chain wire
    pub channel_order: ChannelOrder,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(191, 0, 191),
            intensity: Intensity::TENTH,
            channel_order: ChannelOrder::Grb,
        }
    }
}

// RGB8 has no defmt impl
#[cfg(feature = "defmt")]
impl defmt::Format for MatrixConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "MatrixConfig {{ color: ({=u8}, {=u8}, {=u8}), intensity: {}, channel_order: {} }}",
            self.color.r,
            self.color.g,
            self.color.b,
            self.intensity,
            self.channel_order
        )
    }
}

/// Push-button settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonsConfig {
    /// Minimum time between accepted presses (microseconds)
    pub debounce_us: u64,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            debounce_us: DEBOUNCE_WINDOW_US,
        }
    }
}

/// OLED bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Bus clock
    pub i2c_frequency_hz: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_DISPLAY_ADDRESS,
            i2c_frequency_hz: 400_000,
        }
    }
}

/// Character input settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    pub baudrate: u32,
    /// Pause after each read
    pub poll_interval_ms: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: 115_200,
            poll_interval_ms: 500,
        }
    }
}

/// Refresh loop settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshConfig {
    /// Period of the status/matrix redraw
    pub period_ms: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self { period_ms: 1000 }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub matrix: MatrixConfig,
    pub buttons: ButtonsConfig,
    pub display: DisplayConfig,
    pub serial: SerialConfig,
    pub refresh: RefreshConfig,
}

impl BoardConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
