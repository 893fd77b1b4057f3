//! RP2040-specific HAL for the glyphmatrix firmware
//!
//! - PIO timing helpers for the WS2812 bit protocol
//! - PIO-driven WS2812 LED chain (implements `glyphmatrix_core::traits::LedChain`)

#![no_std]

pub mod pio;
pub mod ws2812;

pub use ws2812::PioLedChain;
