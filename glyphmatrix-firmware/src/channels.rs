//! Cross-task and cross-core shared state
//!
//! Each cell has a single writer; see the task that owns it.

use glyphmatrix_core::shared::{CharacterCell, IndicatorFlag};

/// Last character read from the serial link (written by the reader on core 1)
pub static CURRENT_CHAR: CharacterCell = CharacterCell::new();

/// Green indicator state (written by the button task)
pub static GREEN_LED: IndicatorFlag = IndicatorFlag::new();

/// Blue indicator state (written by the button task)
pub static BLUE_LED: IndicatorFlag = IndicatorFlag::new();
