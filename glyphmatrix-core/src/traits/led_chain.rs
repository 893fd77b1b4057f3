//! Serial addressable LED chain

/// A chain of LEDs fed one packed 24-bit color word at a time
///
/// Words are latched in push order: the first word pushed after the chain
/// has been idle lands on the first LED.
pub trait LedChain {
    /// Push one 24-bit word (bits 23..0), blocking until the transport
    /// accepts it
    fn push_word(&mut self, word: u32);
}
