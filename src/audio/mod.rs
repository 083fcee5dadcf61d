//! Audio feedback using kira.
//!
//! This module provides:
//! - [`synth`]: parametric waveform synthesis into f32 PCM
//! - [`AudioManager`]: pre-generated feedback sounds and fire-and-forget
//!   playback

mod manager;
pub mod synth;

pub use manager::AudioManager;
pub use synth::{Pcm, SAMPLE_RATE};
