//! Display surface trait for the status screen

/// Errors that can occur while drawing or flushing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Communication,
    /// Drawing outside the visible area
    InvalidCoordinates,
}

/// Trait for a monochrome framebuffer display
///
/// Drawing calls only touch the in-memory framebuffer; nothing reaches the
/// panel until [`DisplaySurface::flush`] is awaited.
pub trait DisplaySurface {
    /// Fill the whole framebuffer
    ///
    /// - `invert`: `false` clears every pixel, `true` sets every pixel
    fn clear(&mut self, invert: bool);

    /// Draw ASCII text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points (inclusive)
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError>;

    /// Transfer the framebuffer to the panel
    async fn flush(&mut self) -> Result<(), DisplayError>;
}
