//! Embassy async tasks
//!
//! The reader runs on core 1; buttons and refresh share the core 0
//! executor. Tasks talk only through the cells in `channels`.

pub mod buttons;
pub mod reader;
pub mod refresh;

pub use buttons::button_task;
pub use reader::reader_task;
pub use refresh::{refresh_task, MatrixChain, OledDisplay};
