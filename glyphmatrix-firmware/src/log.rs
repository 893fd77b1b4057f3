//! Status log sink over defmt

use defmt::info;

use glyphmatrix_core::traits::LogSink;

/// Forwards status lines to the RTT log
pub struct DefmtLog;

impl LogSink for DefmtLog {
    fn line(&mut self, text: &str) {
        info!("{=str}", text);
    }
}
