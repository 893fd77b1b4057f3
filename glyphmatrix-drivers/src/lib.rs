//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in glyphmatrix-core:
//!
//! - SSD1306 128x64 OLED over I2C (display surface)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
