//! Indicator LED outputs driven by the buttons
//!
//! Button A owns the green LED, button B the blue one. After an accepted
//! toggle the output pin and its published flag always agree.

use embedded_hal::digital::{OutputPin, PinState};

use super::debounce::{ButtonId, ButtonPanel, Edge, Toggle};
use crate::shared::IndicatorFlag;

/// Green and blue indicator outputs with their published flags
pub struct Indicators<'a, P> {
    green: P,
    blue: P,
    green_flag: &'a IndicatorFlag,
    blue_flag: &'a IndicatorFlag,
}

impl<'a, P: OutputPin> Indicators<'a, P> {
    pub fn new(green: P, blue: P, green_flag: &'a IndicatorFlag, blue_flag: &'a IndicatorFlag) -> Self {
        Self {
            green,
            blue,
            green_flag,
            blue_flag,
        }
    }

    /// Run an edge through the panel and drive the matching output
    ///
    /// Returns the accepted toggle, or `None` for bounces, rising edges and
    /// unknown pins. Nothing is written in the `None` case.
    pub fn handle(
        &mut self,
        panel: &mut ButtonPanel,
        pin: u8,
        edge: Edge,
        now_us: u64,
    ) -> Result<Option<Toggle>, P::Error> {
        match panel.handle(pin, edge, now_us) {
            Some(toggle) => {
                self.apply(toggle)?;
                Ok(Some(toggle))
            }
            None => Ok(None),
        }
    }

    /// Set the pin level first, then publish the flag
    pub fn apply(&mut self, toggle: Toggle) -> Result<(), P::Error> {
        let (pin, flag) = match toggle.button {
            ButtonId::A => (&mut self.green, self.green_flag),
            ButtonId::B => (&mut self.blue, self.blue_flag),
        };
        pin.set_state(PinState::from(toggle.active))?;
        flag.set(toggle.active);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    const PIN_A: u8 = 5;
    const PIN_B: u8 = 6;
    const WINDOW: u64 = 200_000;

    /// Output pin that remembers its level and counts writes
    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    fn panel() -> ButtonPanel {
        ButtonPanel::new(PIN_A, PIN_B, WINDOW)
    }

    #[test]
    fn test_accepted_toggle_drives_pin_and_flag() {
        let green_flag = IndicatorFlag::new();
        let blue_flag = IndicatorFlag::new();
        let mut indicators =
            Indicators::new(MockPin::default(), MockPin::default(), &green_flag, &blue_flag);
        let mut panel = panel();

        let toggle = indicators
            .handle(&mut panel, PIN_A, Edge::Falling, 300_000)
            .unwrap();
        assert_eq!(
            toggle,
            Some(Toggle {
                button: ButtonId::A,
                active: true
            })
        );
        assert!(indicators.green.high);
        assert!(green_flag.is_on());
        assert_eq!(indicators.blue.writes, 0);
        assert!(!blue_flag.is_on());

        // Second accepted press turns it back off
        indicators
            .handle(&mut panel, PIN_A, Edge::Falling, 600_000)
            .unwrap();
        assert!(!indicators.green.high);
        assert!(!green_flag.is_on());
    }

    #[test]
    fn test_button_b_drives_blue() {
        let green_flag = IndicatorFlag::new();
        let blue_flag = IndicatorFlag::new();
        let mut indicators =
            Indicators::new(MockPin::default(), MockPin::default(), &green_flag, &blue_flag);
        let mut panel = panel();

        indicators
            .handle(&mut panel, PIN_B, Edge::Falling, 250_000)
            .unwrap();
        assert!(indicators.blue.high);
        assert!(blue_flag.is_on());
        assert_eq!(indicators.green.writes, 0);
    }

    #[test]
    fn test_bounce_touches_neither_pin_nor_flag() {
        let green_flag = IndicatorFlag::new();
        let blue_flag = IndicatorFlag::new();
        let mut indicators =
            Indicators::new(MockPin::default(), MockPin::default(), &green_flag, &blue_flag);
        let mut panel = panel();

        indicators
            .handle(&mut panel, PIN_A, Edge::Falling, 300_000)
            .unwrap();
        let writes = indicators.green.writes;

        // 100 ms later is inside the window
        let toggle = indicators
            .handle(&mut panel, PIN_A, Edge::Falling, 400_000)
            .unwrap();
        assert_eq!(toggle, None);
        assert_eq!(indicators.green.writes, writes);
        assert!(indicators.green.high);
        assert!(green_flag.is_on());
    }

    #[test]
    fn test_ignored_edges_write_nothing() {
        let green_flag = IndicatorFlag::new();
        let blue_flag = IndicatorFlag::new();
        let mut indicators =
            Indicators::new(MockPin::default(), MockPin::default(), &green_flag, &blue_flag);
        let mut panel = panel();

        assert_eq!(
            indicators
                .handle(&mut panel, PIN_A, Edge::Rising, 300_000)
                .unwrap(),
            None
        );
        assert_eq!(
            indicators
                .handle(&mut panel, 22, Edge::Falling, 300_000)
                .unwrap(),
            None
        );
        assert_eq!(indicators.green.writes + indicators.blue.writes, 0);
        assert!(!green_flag.is_on() && !blue_flag.is_on());
    }
}
