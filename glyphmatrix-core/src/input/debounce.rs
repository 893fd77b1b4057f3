//! Edge-triggered toggle debouncing
//!
//! Every accepted falling edge flips a button's state. An edge is accepted
//! only when strictly more than the debounce window has passed since the
//! last accepted edge on the same button; anything sooner is contact bounce
//! and is dropped.

/// Default debounce window in microseconds
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

/// Signal edge reported by a GPIO input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Falling,
    Rising,
}

/// Which of the two buttons an edge belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Toggles the green indicator
    A,
    /// Toggles the blue indicator
    B,
}

/// Toggle state for a single button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_toggle_us: u64,
    active: bool,
    window_us: u64,
}

impl Debouncer {
    /// Inactive, with the last toggle at time zero
    pub const fn new(window_us: u64) -> Self {
        Self {
            last_toggle_us: 0,
            active: false,
            window_us,
        }
    }

    /// Feed a falling edge seen at `now_us`
    ///
    /// Returns the new state if the edge toggled the button, `None` if it
    /// was discarded as bounce.
    pub fn on_falling_edge(&mut self, now_us: u64) -> Option<bool> {
        if now_us.saturating_sub(self.last_toggle_us) > self.window_us {
            self.active = !self.active;
            self.last_toggle_us = now_us;
            Some(self.active)
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_toggle_us(&self) -> u64 {
        self.last_toggle_us
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW_US)
    }
}

/// An accepted toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggle {
    pub button: ButtonId,
    /// State after the toggle
    pub active: bool,
}

/// Both buttons, keyed by GPIO number
#[derive(Debug, Clone)]
pub struct ButtonPanel {
    a_pin: u8,
    b_pin: u8,
    a: Debouncer,
    b: Debouncer,
}

impl ButtonPanel {
    /// Create a panel for buttons wired to `a_pin` and `b_pin`
    pub const fn new(a_pin: u8, b_pin: u8, window_us: u64) -> Self {
        Self {
            a_pin,
            b_pin,
            a: Debouncer::new(window_us),
            b: Debouncer::new(window_us),
        }
    }

    /// Map a GPIO number to a button
    pub fn button_for_pin(&self, pin: u8) -> Option<ButtonId> {
        if pin == self.a_pin {
            Some(ButtonId::A)
        } else if pin == self.b_pin {
            Some(ButtonId::B)
        } else {
            None
        }
    }

    /// Handle an edge event from the GPIO interrupt
    ///
    /// Unknown pins and rising edges are ignored.
    pub fn handle(&mut self, pin: u8, edge: Edge, now_us: u64) -> Option<Toggle> {
        if edge != Edge::Falling {
            return None;
        }
        let button = self.button_for_pin(pin)?;
        let active = self.debouncer_mut(button).on_falling_edge(now_us)?;
        Some(Toggle { button, active })
    }

    pub fn is_active(&self, button: ButtonId) -> bool {
        self.debouncer(button).is_active()
    }

    pub fn debouncer(&self, button: ButtonId) -> &Debouncer {
        match button {
            ButtonId::A => &self.a,
            ButtonId::B => &self.b,
        }
    }

    fn debouncer_mut(&mut self, button: ButtonId) -> &mut Debouncer {
        match button {
            ButtonId::A => &mut self.a,
            ButtonId::B => &mut self.b,
        }
    }
}
