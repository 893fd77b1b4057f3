//! Single-writer cells shared between cores and tasks
//!
//! Each cell has exactly one writer and any number of readers. Only plain
//! loads and stores are used, so the cells work on cores without
//! compare-and-swap (Cortex-M0+).

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Most recently received input byte
///
/// Written by the serial reader, read by the refresh loop. Holds
/// [`CharacterCell::UNSET`] until the first byte arrives.
pub struct CharacterCell {
    value: AtomicU8,
}

impl CharacterCell {
    /// Value before any byte has been read
    pub const UNSET: u8 = 0;

    pub const fn new() -> Self {
        Self {
            value: AtomicU8::new(Self::UNSET),
        }
    }

    /// Replace the stored byte (last writer wins)
    pub fn store(&self, character: u8) {
        self.value.store(character, Ordering::Release);
    }

    pub fn load(&self) -> u8 {
        self.value.load(Ordering::Acquire)
    }

    #[cfg(test)]
    /// Current byte, or `None` while still unset
    pub(crate) fn get(&self) -> Option<u8> {
        match self.load() {
            Self::UNSET => None,
            c => Some(c),
        }
    }
}

impl Default for CharacterCell {
    fn default() -> Self {
        Self::new()
    }
}

/// Published on/off state of one indicator LED
///
/// Written by the button task after an accepted toggle.
pub struct IndicatorFlag {
    on: AtomicBool,
}

impl IndicatorFlag {
    pub const fn new() -> Self {
        Self {
            on: AtomicBool::new(false),
        }
    }

    pub fn set(&self, on: bool) {
        self.on.store(on, Ordering::Release);
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }
}

impl Default for IndicatorFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of both indicator LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedStatus {
    pub green: bool,
    pub blue: bool,
}

impl LedStatus {
    /// Read both flags
    pub fn snapshot(green: &IndicatorFlag, blue: &IndicatorFlag) -> Self {
        Self {
            green: green.is_on(),
            blue: blue.is_on(),
        }
    }
}
