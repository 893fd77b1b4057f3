//! Line-oriented log output

/// Destination for human-readable status lines
pub trait LogSink {
    /// Emit one line (no trailing newline)
    fn line(&mut self, text: &str);
}
