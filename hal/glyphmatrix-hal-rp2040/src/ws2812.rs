//! PIO-driven WS2812 LED chain
//!
//! One state machine shifts 24-bit words out MSB first. Words are pushed
//! left-aligned in the 32-bit TX FIFO; autopull at 24 bits discards the
//! 8 padding bits. The chain latches once the line has been idle for
//! more than 50µs, which the refresh period always provides.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use fixed::types::U24F8;
use glyphmatrix_core::traits::LedChain;

use crate::pio::{calc_clock_divider, BITS_PER_LED};

/// WS2812 chain on a PIO state machine
pub struct PioLedChain<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> PioLedChain<'d, PIO, SM> {
    /// Load the WS2812 program and start the state machine on `data_pin`
    pub fn new<DATA: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        data_pin: Peri<'d, DATA>,
    ) -> Self {
        // T1 = 2, T2 = 5, T3 = 3 cycles (delays are cycles - 1)
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1       side 0 [2]", // T3: low, fetch next bit
            "    jmp !x do_zero side 1 [1]", // T1: high lead-in
            "    jmp bitloop    side 1 [4]", // T2: stay high for a 1
            "do_zero:",
            "    nop            side 0 [4]", // T2: drop low for a 0
            ".wrap"
        );
        let installed = common.load_program(&prg.program);

        let data_pio_pin = common.make_pio_pin(data_pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&data_pio_pin]);
        cfg.clock_divider = U24F8::from_bits(calc_clock_divider(clk_sys_freq()));
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_LED,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&data_pio_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<'d, PIO: Instance, const SM: usize> LedChain for PioLedChain<'d, PIO, SM> {
    fn push_word(&mut self, word: u32) {
        // Spin until the FIFO has room; a full frame is 25 words at 30µs each
        while !self.sm.tx().try_push(word << 8) {}
    }
}
