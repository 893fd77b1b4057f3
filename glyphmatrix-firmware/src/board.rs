//! Raspberry Pi Pico pin map
//!
//! GPIO numbers as wired on the demo board. The peripherals themselves are
//! taken by name in `main`; these constants feed the button panel and logs.

/// WS2812 matrix data line (PIO0 SM0)
pub const MATRIX_DATA_PIN: u8 = 7;

/// Push-buttons, active low with internal pull-ups
pub const BUTTON_A_PIN: u8 = 5;
pub const BUTTON_B_PIN: u8 = 6;

/// Indicator LEDs
pub const LED_RED_PIN: u8 = 13;
pub const LED_GREEN_PIN: u8 = 11;
pub const LED_BLUE_PIN: u8 = 12;

/// SSD1306 on I2C1
pub const I2C_SDA_PIN: u8 = 14;
pub const I2C_SCL_PIN: u8 = 15;

/// Character input on UART0
pub const UART_TX_PIN: u8 = 0;
pub const UART_RX_PIN: u8 = 1;
