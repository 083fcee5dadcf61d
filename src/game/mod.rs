//! The practice state machine.
//!
//! This module provides:
//! - [`PracticeSession`]: session lifecycle, input window and evaluation
//! - [`InputCapture`]: keys collected for the current attempt
//! - [`SessionScore`]: per-session answer tally
//! - [`AudioCue`]: side effects signalled to the shell

mod capture;
mod score;
mod session;

pub use capture::InputCapture;
pub use score::SessionScore;
pub use session::{AudioCue, Phase, PracticeConfig, PracticeSession};
