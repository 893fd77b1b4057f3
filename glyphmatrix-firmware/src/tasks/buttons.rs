//! Push-button task
//!
//! Each button has its own edge watcher. Both run inside one task and share
//! the debounce state machine and the indicator outputs, so a press on one
//! button is latched while the other is being handled.

use core::cell::RefCell;

use defmt::*;
use embassy_futures::join::join;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;

use glyphmatrix_core::input::{ButtonPanel, Edge, Indicators};

use crate::board::{BUTTON_A_PIN, BUTTON_B_PIN};

/// Green and blue outputs with their published flags
pub type IndicatorOutputs = Indicators<'static, Output<'static>>;

struct ButtonState {
    panel: ButtonPanel,
    indicators: IndicatorOutputs,
}

/// Button task - owns both debouncers and the indicator outputs
#[embassy_executor::task]
pub async fn button_task(
    mut button_a: Input<'static>,
    mut button_b: Input<'static>,
    indicators: IndicatorOutputs,
    debounce_us: u64,
) {
    info!("Button task started (debounce {} us)", debounce_us);

    let state = RefCell::new(ButtonState {
        panel: ButtonPanel::new(BUTTON_A_PIN, BUTTON_B_PIN, debounce_us),
        indicators,
    });

    join(
        watch_button(&mut button_a, BUTTON_A_PIN, &state),
        watch_button(&mut button_b, BUTTON_B_PIN, &state),
    )
    .await;
}

async fn watch_button(input: &mut Input<'static>, pin: u8, state: &RefCell<ButtonState>) {
    loop {
        input.wait_for_falling_edge().await;
        let now_us = Instant::now().as_micros();

        // No await while borrowed
        let mut state = state.borrow_mut();
        let ButtonState { panel, indicators } = &mut *state;
        match indicators.handle(panel, pin, Edge::Falling, now_us) {
            Ok(Some(toggle)) => debug!("Button {:?} toggled: {}", toggle.button, toggle.active),
            Ok(None) => trace!("Bounce on GPIO{} ignored", pin),
            Err(e) => match e {},
        }
    }
}
