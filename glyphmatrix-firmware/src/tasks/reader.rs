//! Serial character reader (core 1)
//!
//! Reads one byte at a time from UART0 and publishes it as the current
//! character, then sleeps for the poll interval.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Duration, Timer};
use embedded_io_async::Read;

use crate::channels::CURRENT_CHAR;

/// Reader task - last received byte wins
#[embassy_executor::task]
pub async fn reader_task(mut rx: BufferedUartRx, poll_interval_ms: u32) {
    info!("Reader task started on core 1");

    let poll = Duration::from_millis(poll_interval_ms as u64);
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                let character = buf[0];
                CURRENT_CHAR.store(character);
                debug!("Character received: {=u8:#x}", character);
            }
            Ok(_) => {
                // Zero-length read, no new character
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }

        Timer::after(poll).await;
    }
}
