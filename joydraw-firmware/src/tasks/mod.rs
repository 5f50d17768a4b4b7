//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod sketch;

pub use buttons::button_task;
pub use sketch::sketch_task;
