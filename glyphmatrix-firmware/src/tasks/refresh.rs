//! Refresh task
//!
//! Once per period: redraw the status screen from the current character
//! and LED flags, then push a fresh frame to the LED matrix.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_time::{Duration, Ticker};

use glyphmatrix_core::matrix::MatrixRenderer;
use glyphmatrix_core::shared::{CharacterCell, LedStatus};
use glyphmatrix_core::status::{StatusPresenter, StatusReport};
use glyphmatrix_drivers::display::Ssd1306;
use glyphmatrix_hal_rp2040::PioLedChain;

use crate::channels::{BLUE_LED, CURRENT_CHAR, GREEN_LED};
use crate::log::DefmtLog;

/// SSD1306 on the async I2C1 bus
pub type OledDisplay = Ssd1306<I2c<'static, I2C1, Async>>;

/// WS2812 matrix on PIO0 state machine 0
pub type MatrixChain = PioLedChain<'static, PIO0, 0>;

/// Refresh task - status screen + matrix frame every `period_ms`
#[embassy_executor::task]
pub async fn refresh_task(
    mut display: OledDisplay,
    mut chain: MatrixChain,
    mut renderer: MatrixRenderer,
    period_ms: u32,
) {
    info!("Refresh task started ({} ms period)", period_ms);

    let mut presenter = StatusPresenter::new();
    let mut log = DefmtLog;
    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));
    let mut last_character = CharacterCell::UNSET;

    loop {
        let character = CURRENT_CHAR.load();
        if character != last_character {
            debug!("Showing character {=u8:#x}", character);
            last_character = character;
        }

        let report = StatusReport::new(character, LedStatus::snapshot(&GREEN_LED, &BLUE_LED));
        if let Err(e) = presenter.present(&report, &mut display, &mut log).await {
            warn!("Display update failed: {:?}", e);
        }

        renderer.render(character, &mut chain);
        trace!("Refresh complete");

        ticker.next().await;
    }
}
