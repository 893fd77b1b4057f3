//! Glyphmatrix - serial character to LED glyph demo
//!
//! Main firmware binary for the Raspberry Pi Pico. Core 1 reads characters
//! from UART0; core 0 shows them on an SSD1306 OLED, renders digits on a
//! 5x5 WS2812 matrix, and toggles two indicator LEDs from debounced
//! push-buttons.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{Executor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::peripherals::{I2C1, PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glyphmatrix_core::input::Indicators;
use glyphmatrix_core::matrix::MatrixRenderer;
use glyphmatrix_core::traits::DisplaySurface;
use glyphmatrix_drivers::display::Ssd1306;
use glyphmatrix_hal_rp2040::PioLedChain;

mod board;
mod channels;
mod config;
mod log;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// Core 1 stack and executor
static CORE1_STACK: StaticCell<Stack<4096>> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Glyphmatrix firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Indicator LEDs, all off at boot. Red is wired but never toggled.
    let _red = Output::new(p.PIN_13, Level::Low);
    let green = Output::new(p.PIN_11, Level::Low);
    let blue = Output::new(p.PIN_12, Level::Low);
    info!(
        "Indicators on GPIO{}/{}/{} (r/g/b)",
        board::LED_RED_PIN,
        board::LED_GREEN_PIN,
        board::LED_BLUE_PIN
    );

    // Buttons, active low
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    // SSD1306 on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.display.i2c_frequency_hz;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Ssd1306::new(i2c, config.display.address);
    match display.init().await {
        Ok(()) => {
            DisplaySurface::clear(&mut display, false);
            if let Err(e) = display.flush().await {
                warn!("Display clear failed: {:?}", e);
            }
            info!(
                "SSD1306 initialized at {=u8:#x} (SDA GPIO{}, SCL GPIO{})",
                config.display.address,
                board::I2C_SDA_PIN,
                board::I2C_SCL_PIN
            );
        }
        Err(e) => {
            warn!("SSD1306 init failed: {:?}", e);
        }
    }

    // WS2812 matrix on PIO0
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let chain = PioLedChain::new(&mut common, sm0, p.PIN_7);
    let renderer = MatrixRenderer::from_config(&config.matrix);
    info!("LED matrix initialized on GPIO{}", board::MATRIX_DATA_PIN);

    // UART0 for character input
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.serial.baudrate;

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    info!(
        "UART0 initialized at {} baud (TX GPIO{}, RX GPIO{})",
        config.serial.baudrate,
        board::UART_TX_PIN,
        board::UART_RX_PIN
    );

    // Serial reader runs on core 1 with its own executor
    let poll_interval_ms = config.serial.poll_interval_ms;
    let stack = CORE1_STACK.init(Stack::new());
    spawn_core1(p.CORE1, stack, move || {
        let executor1 = EXECUTOR1.init(Executor::new());
        executor1.run(|spawner| {
            spawner
                .spawn(tasks::reader_task(rx, poll_interval_ms))
                .unwrap();
        })
    });

    let indicators = Indicators::new(green, blue, &channels::GREEN_LED, &channels::BLUE_LED);
    spawner
        .spawn(tasks::button_task(
            button_a,
            button_b,
            indicators,
            config.buttons.debounce_us,
        ))
        .unwrap();
    spawner
        .spawn(tasks::refresh_task(
            display,
            chain,
            renderer,
            config.refresh.period_ms,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do; it also keeps `_red` alive
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
