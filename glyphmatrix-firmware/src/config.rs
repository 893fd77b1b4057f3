//! Board configuration loading
//!
//! board.toml is embedded at build time (and validated by build.rs), then
//! parsed at boot by the no_std parser in glyphmatrix-core.

use defmt::*;

use glyphmatrix_core::config::{parse_config, BoardConfig};

/// Embedded configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse the embedded config, falling back to built-in defaults
pub fn load() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded board configuration");
            config
        }
        Err(e) => {
            error!("Invalid board.toml ({:?}), using defaults", e);
            BoardConfig::default()
        }
    }
}
