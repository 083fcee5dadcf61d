use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{Context, Result};
use kira::AudioManager as KiraAudioManager;
use kira::AudioManagerSettings;
use kira::sound::static_sound::StaticSoundData;
use tracing::{info, warn};

use crate::catalog::NoteCatalog;
use crate::game::AudioCue;

use super::synth::{self, Pcm, SAMPLE_RATE};

const TONE_DURATION: f32 = 0.5;
const TONE_VOLUME: f32 = 0.5;
const BUZZ_CARRIER_HZ: f32 = 200.0;
const BUZZ_MOD_HZ: f32 = 5.0;
const BUZZ_DURATION: f32 = 0.5;
// C5, E5, G5
const FANFARE_FREQS: [f32; 3] = [523.25, 659.25, 783.99];
const FANFARE_SEGMENT: f32 = 0.2;

/// Owns the audio device and the pre-generated feedback sounds.
///
/// All buffers are synthesized once at construction and held for the process
/// lifetime. Playback is fire-and-forget; failures are logged and swallowed.
pub struct AudioManager {
    manager: KiraAudioManager,
    tones: HashMap<&'static str, StaticSoundData>,
    buzz: StaticSoundData,
    fanfare: StaticSoundData,
}

impl AudioManager {
    pub fn new(catalog: &NoteCatalog) -> Result<Self> {
        let manager = KiraAudioManager::new(AudioManagerSettings::default())
            .context("Failed to create audio manager")?;

        let mut tones = HashMap::new();
        for note in catalog.notes() {
            let pcm = synth::sine_wave(note.frequency, TONE_DURATION, TONE_VOLUME, SAMPLE_RATE);
            tones.insert(note.name, sound_data(&pcm, note.name)?);
        }

        let buzz_pcm = synth::modulated_sawtooth(
            BUZZ_CARRIER_HZ,
            BUZZ_MOD_HZ,
            BUZZ_DURATION,
            TONE_VOLUME,
            SAMPLE_RATE,
        );
        let buzz = sound_data(&buzz_pcm, "buzz")?;

        let fanfare_pcm =
            synth::tone_sequence(&FANFARE_FREQS, FANFARE_SEGMENT, TONE_VOLUME, SAMPLE_RATE);
        let fanfare = sound_data(&fanfare_pcm, "fanfare")?;

        info!(tones = tones.len(), "generated feedback sounds");

        Ok(Self {
            manager,
            tones,
            buzz,
            fanfare,
        })
    }

    /// Trigger playback for a cue signalled by the state machine.
    pub fn play(&mut self, cue: AudioCue) {
        let sound = match cue {
            AudioCue::Tone(name) => match self.tones.get(name) {
                Some(sound) => sound,
                None => {
                    warn!(name, "no tone generated for note");
                    return;
                }
            },
            AudioCue::Buzz => &self.buzz,
            AudioCue::Fanfare => &self.fanfare,
        };

        if let Err(e) = self.manager.play(sound.clone()) {
            warn!("Failed to play feedback sound: {e}");
        }
    }

    pub fn tone_count(&self) -> usize {
        self.tones.len()
    }
}

fn sound_data(pcm: &Pcm, name: &str) -> Result<StaticSoundData> {
    StaticSoundData::from_cursor(Cursor::new(pcm.to_wav_bytes()))
        .with_context(|| format!("Failed to create sound data for {name}"))
}
