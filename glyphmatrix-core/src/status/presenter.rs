//! Status presenter
//!
//! Draws the fixed status layout: a two-line caption, the current character
//! underlined on the right, and one line per indicator LED. The same LED
//! facts are mirrored to the log sink.

use crate::shared::LedStatus;
use crate::traits::{DisplayError, DisplaySurface, LogSink};

/// Caption lines, drawn at x = 12
const CAPTION_TOP: &str = "Caractere";
const CAPTION_BOTTOM: &str = "Escolhido";

const GREEN_OFF: &str = "Led Green  off ";
const GREEN_ON: &str = "Led Green  on ";
const BLUE_OFF: &str = "Led Blue   off ";
const BLUE_ON: &str = "Led Blue   on ";

const LOG_GREEN_OFF: &str = "Status do LED verde: desligado";
const LOG_GREEN_ON: &str = "Status do LED verde: ligado";
const LOG_BLUE_OFF: &str = "Status do LED azul: desligado";
const LOG_BLUE_ON: &str = "Status do LED azul: ligado";

/// Left margin of the caption and LED lines
const TEXT_X: i32 = 12;
const CAPTION_TOP_Y: i32 = 10;
const CAPTION_BOTTOM_Y: i32 = 20;
const GREEN_Y: i32 = 35;
const BLUE_Y: i32 = 45;

/// Character position and its underline
const CHAR_X: i32 = 99;
const CHAR_Y: i32 = 15;
const UNDERLINE: (i32, i32, i32, i32) = (98, 25, 109, 25);

/// Everything one status frame shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Current input byte (0 while nothing has been read)
    pub character: u8,
    pub leds: LedStatus,
}

impl StatusReport {
    pub fn new(character: u8, leds: LedStatus) -> Self {
        Self { character, leds }
    }

    pub fn green_line(&self) -> &'static str {
        if self.leds.green {
            GREEN_ON
        } else {
            GREEN_OFF
        }
    }

    pub fn blue_line(&self) -> &'static str {
        if self.leds.blue {
            BLUE_ON
        } else {
            BLUE_OFF
        }
    }

    pub fn green_log(&self) -> &'static str {
        if self.leds.green {
            LOG_GREEN_ON
        } else {
            LOG_GREEN_OFF
        }
    }

    pub fn blue_log(&self) -> &'static str {
        if self.leds.blue {
            LOG_BLUE_ON
        } else {
            LOG_BLUE_OFF
        }
    }
}

/// Writes status frames to a display and a log sink
#[derive(Debug, Default)]
pub struct StatusPresenter {
    // Reused so the character can be handed out as a &str
    glyph_text: [u8; 1],
}

impl StatusPresenter {
    pub const fn new() -> Self {
        Self { glyph_text: [0] }
    }

    /// Log the LED lines, then redraw and flush the screen
    ///
    /// The log lines are written even when the display transfer fails.
    pub async fn present<D, L>(
        &mut self,
        report: &StatusReport,
        display: &mut D,
        log: &mut L,
    ) -> Result<(), DisplayError>
    where
        D: DisplaySurface,
        L: LogSink,
    {
        log.line(report.green_log());
        log.line(report.blue_log());

        self.draw(report, display)?;
        display.flush().await
    }

    /// Compose the frame into the display's framebuffer
    pub fn draw<D: DisplaySurface>(
        &mut self,
        report: &StatusReport,
        display: &mut D,
    ) -> Result<(), DisplayError> {
        display.clear(false);
        display.draw_text(CAPTION_TOP, TEXT_X, CAPTION_TOP_Y)?;
        display.draw_text(CAPTION_BOTTOM, TEXT_X, CAPTION_BOTTOM_Y)?;
        display.draw_text(self.character_text(report.character), CHAR_X, CHAR_Y)?;

        let (x0, y0, x1, y1) = UNDERLINE;
        display.draw_line(x0, y0, x1, y1)?;

        display.draw_text(report.green_line(), TEXT_X, GREEN_Y)?;
        display.draw_text(report.blue_line(), TEXT_X, BLUE_Y)
    }

    /// Printable ASCII as a one-character string, anything else as ""
    fn character_text(&mut self, character: u8) -> &str {
        if character.is_ascii_graphic() || character == b' ' {
            self.glyph_text[0] = character;
            core::str::from_utf8(&self.glyph_text).unwrap_or("")
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use heapless::{String, Vec};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Clear(bool),
        Text(String<16>, i32, i32),
        Line(i32, i32, i32, i32),
        Flush,
    }

    struct RecordingDisplay {
        calls: Vec<Call, 16>,
        fail_flush: bool,
    }

    impl RecordingDisplay {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                fail_flush: false,
            }
        }

        fn texts(&self) -> Vec<(&str, i32, i32), 8> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(s, x, y) => Some((s.as_str(), *x, *y)),
                    _ => None,
                })
                .collect()
        }
    }

    impl DisplaySurface for RecordingDisplay {
        fn clear(&mut self, invert: bool) {
            self.calls.push(Call::Clear(invert)).ok();
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
            let text = String::try_from(text).map_err(|_| DisplayError::InvalidCoordinates)?;
            self.calls.push(Call::Text(text, x, y)).ok();
            Ok(())
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
            self.calls.push(Call::Line(x0, y0, x1, y1)).ok();
            Ok(())
        }

        async fn flush(&mut self) -> Result<(), DisplayError> {
            self.calls.push(Call::Flush).ok();
            if self.fail_flush {
                Err(DisplayError::Communication)
            } else {
                Ok(())
            }
        }
    }

    struct RecordingLog {
        lines: Vec<&'static str, 8>,
    }

    impl LogSink for RecordingLog {
        fn line(&mut self, text: &str) {
            // Presenter only logs its own constants
            let known = [LOG_GREEN_OFF, LOG_GREEN_ON, LOG_BLUE_OFF, LOG_BLUE_ON];
            if let Some(s) = known.iter().find(|s| **s == text) {
                self.lines.push(*s).ok();
            }
        }
    }

    fn present(report: StatusReport) -> (RecordingDisplay, RecordingLog) {
        let mut display = RecordingDisplay::new();
        let mut log = RecordingLog { lines: Vec::new() };
        let mut presenter = StatusPresenter::new();
        block_on(presenter.present(&report, &mut display, &mut log)).unwrap();
        (display, log)
    }

    #[test]
    fn test_full_layout() {
        let leds = LedStatus {
            green: true,
            blue: false,
        };
        let (display, _) = present(StatusReport::new(b'5', leds));

        assert_eq!(display.calls[0], Call::Clear(false));
        assert_eq!(
            display.texts().as_slice(),
            &[
                ("Caractere", 12, 10),
                ("Escolhido", 12, 20),
                ("5", 99, 15),
                ("Led Green  on ", 12, 35),
                ("Led Blue   off ", 12, 45),
            ]
        );
        assert!(display.calls.contains(&Call::Line(98, 25, 109, 25)));
        assert_eq!(display.calls.last(), Some(&Call::Flush));
    }

    #[test]
    fn test_log_lines_follow_leds() {
        let (_, log) = present(StatusReport::new(b'5', LedStatus::default()));
        assert_eq!(
            log.lines.as_slice(),
            &["Status do LED verde: desligado", "Status do LED azul: desligado"]
        );

        let leds = LedStatus {
            green: false,
            blue: true,
        };
        let (_, log) = present(StatusReport::new(b'5', leds));
        assert_eq!(
            log.lines.as_slice(),
            &["Status do LED verde: desligado", "Status do LED azul: ligado"]
        );
    }

    #[test]
    fn test_unset_character_draws_empty_text() {
        let (display, _) = present(StatusReport::default());
        assert!(display.texts().contains(&("", 99, 15)));
    }

    #[test]
    fn test_control_character_not_drawn() {
        let (display, _) = present(StatusReport::new(b'\n', LedStatus::default()));
        assert!(display.texts().contains(&("", 99, 15)));
    }

    #[test]
    fn test_flush_error_propagates_after_logging() {
        let mut display = RecordingDisplay::new();
        display.fail_flush = true;
        let mut log = RecordingLog { lines: Vec::new() };
        let mut presenter = StatusPresenter::new();

        let result = block_on(presenter.present(&StatusReport::default(), &mut display, &mut log));

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(log.lines.len(), 2);
    }
}
