//! WS2812 bit timing on the PIO
//!
//! Each data bit takes `CYCLES_PER_BIT` PIO cycles split into three phases:
//! T1 drives the line high, T2 keeps it high for a 1 bit and pulls it low
//! for a 0 bit, and T3 holds it low while the next bit is shifted out. The
//! clock divider sets the PIO frequency to `BIT_FREQ_HZ * CYCLES_PER_BIT`.

/// WS2812 data rate
pub const BIT_FREQ_HZ: u32 = 800_000;

/// Phase lengths in PIO cycles
pub const T1: u8 = 2;
pub const T2: u8 = 5;
pub const T3: u8 = 3;

/// PIO cycles per transmitted bit
pub const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// Bits per LED in a frame word
pub const BITS_PER_LED: u8 = 24;

/// Calculate the clock divider for a given system clock
///
/// divider = sys_clk / (bit_freq * cycles_per_bit)
///
/// Returns the raw 16.8 fixed-point value (integer part in bits 23..8).
pub fn calc_clock_divider(sys_clk_hz: u32) -> u32 {
    let pio_hz = BIT_FREQ_HZ as u64 * CYCLES_PER_BIT as u64;
    let divider_x256 = (sys_clk_hz as u64 * 256) / pio_hz;

    // Divider must be at least 1.0 and fit in 16.8
    divider_x256.clamp(256, 0x00FF_FFFF) as u32
}
