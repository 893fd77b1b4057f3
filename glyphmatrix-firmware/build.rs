//! Build script for glyphmatrix-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time, first as TOML, then with the
//!   subset parser the firmware uses at boot

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use glyphmatrix_core::config::parse_config;
use serde::Deserialize;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Shape of board.toml; unknown sections and keys are rejected
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardToml {
    matrix: Option<MatrixToml>,
    buttons: Option<ButtonsToml>,
    display: Option<DisplayToml>,
    serial: Option<SerialToml>,
    refresh: Option<RefreshToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatrixToml {
    red: Option<i64>,
    green: Option<i64>,
    blue: Option<i64>,
    intensity_percent: Option<i64>,
    channel_order: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ButtonsToml {
    debounce_us: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayToml {
    address: Option<i64>,
    i2c_frequency_hz: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SerialToml {
    baudrate: Option<i64>,
    poll_interval_ms: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RefreshToml {
    period_ms: Option<i64>,
}

/// Validate board.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds board.toml at build time.                   ║\n\
            ║  Please create one in the glyphmatrix-firmware directory.        ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: BoardToml = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = validate_ranges(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in board.toml                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Valid TOML the boot parser rejects would silently fall back to defaults
    if let Err(e) = parse_config(&config_content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml uses TOML the firmware cannot parse           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  Error: {:<56} ║\n\
            ║                                                                  ║\n\
            ║  Use [section] headers with key = integer or string values.      ║\n\
            ║  Inline tables, arrays and escapes are not supported.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e)
        );
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check every present value against the range the firmware parser accepts
fn validate_ranges(config: &BoardToml) -> Vec<String> {
    let mut errors = Vec::new();

    let mut check = |section: &str, key: &str, value: Option<i64>, min: i64, max: i64| {
        if let Some(v) = value {
            if v < min || v > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
        }
    };

    if let Some(matrix) = &config.matrix {
        check("matrix", "red", matrix.red, 0, 255);
        check("matrix", "green", matrix.green, 0, 255);
        check("matrix", "blue", matrix.blue, 0, 255);
        check("matrix", "intensity_percent", matrix.intensity_percent, 0, 100);
    }
    if let Some(buttons) = &config.buttons {
        check("buttons", "debounce_us", buttons.debounce_us, 0, i64::MAX);
    }
    if let Some(display) = &config.display {
        check("display", "address", display.address, 0x08, 0x77);
        check("display", "i2c_frequency_hz", display.i2c_frequency_hz, 1, 1_000_000);
    }
    if let Some(serial) = &config.serial {
        check("serial", "baudrate", serial.baudrate, 1, 4_000_000);
        check("serial", "poll_interval_ms", serial.poll_interval_ms, 1, u32::MAX as i64);
    }
    if let Some(refresh) = &config.refresh {
        check("refresh", "period_ms", refresh.period_ms, 1, u32::MAX as i64);
    }

    if let Some(order) = config.matrix.as_ref().and_then(|m| m.channel_order.as_ref()) {
        if !["grb", "rgb"].contains(&order.to_ascii_lowercase().as_str()) {
            errors.push("[matrix] channel_order must be 'grb' or 'rgb'".to_string());
        }
    }

    errors
}
