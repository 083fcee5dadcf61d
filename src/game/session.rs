use rand::Rng;

use crate::catalog::{Note, NoteCatalog, Valve};

use super::{InputCapture, SessionScore};

/// Where the practice loop currently is.
///
/// A session timer is running exactly while the phase is `Capturing` or
/// `Feedback`; the two are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-game menu; no session has started.
    Idle,
    /// A note is shown and keys are being collected.
    Capturing,
    /// Wrong answer: the correct fingering is on display.
    Feedback,
    /// Timer expired; waiting for a restart.
    GameOver,
}

/// Audio side effect signalled by the state machine. The shell forwards
/// these to the audio subsystem; the session never touches the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Play the tone generated for the named note.
    Tone(&'static str),
    /// Play the incorrect-answer buzz.
    Buzz,
    /// Play the game-over fanfare.
    Fanfare,
}

#[derive(Debug, Clone, Copy)]
pub struct PracticeConfig {
    /// Length of a timed session.
    pub session_us: i64,
    /// Input window measured from the first keypress of an attempt.
    pub input_window_us: i64,
    /// How long the correct fingering stays on screen after a wrong answer.
    pub feedback_us: i64,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            session_us: 60_000_000,
            input_window_us: 250_000,
            feedback_us: 2_000_000,
        }
    }
}

/// The practice state machine.
///
/// All transitions are driven by `tick` comparing the caller-supplied
/// `now_us` against recorded instants; the session itself never reads a
/// clock, so tests drive it with plain numbers. The random source is
/// injected the same way.
pub struct PracticeSession<R: Rng> {
    catalog: NoteCatalog,
    config: PracticeConfig,
    rng: R,
    phase: Phase,
    started_at_us: i64,
    score: SessionScore,
    current: Option<usize>,
    capture: InputCapture,
    feedback_since_us: Option<i64>,
}

impl<R: Rng> PracticeSession<R> {
    pub fn new(catalog: NoteCatalog, config: PracticeConfig, rng: R) -> Self {
        assert!(!catalog.is_empty(), "note catalog must not be empty");
        Self {
            catalog,
            config,
            rng,
            phase: Phase::Idle,
            started_at_us: 0,
            score: SessionScore::new(),
            current: None,
            capture: InputCapture::new(),
            feedback_since_us: None,
        }
    }

    /// Start (or restart) a timed session. Valid from `Idle` and `GameOver`;
    /// ignored while a session is running.
    pub fn start(&mut self, now_us: i64) {
        if self.is_running() {
            return;
        }
        self.score.reset();
        self.started_at_us = now_us;
        self.next_note();
    }

    /// Record a recognized keypress. Keys arriving outside `Capturing` are
    /// dropped.
    pub fn handle_key(&mut self, valve: Valve, now_us: i64) {
        if self.phase == Phase::Capturing {
            self.capture.press(valve, now_us);
        }
    }

    /// Advance clock-based transitions. At most one cue per tick.
    pub fn tick(&mut self, now_us: i64) -> Option<AudioCue> {
        if !self.is_running() {
            return None;
        }

        if self.remaining_us(now_us) <= 0 {
            // Session over: in-flight capture/feedback state is discarded,
            // the score stays up for the game-over screen.
            self.phase = Phase::GameOver;
            self.current = None;
            self.capture.clear();
            self.feedback_since_us = None;
            return Some(AudioCue::Fanfare);
        }

        match self.phase {
            Phase::Feedback => {
                if self
                    .feedback_since_us
                    .is_some_and(|since| now_us - since >= self.config.feedback_us)
                {
                    self.next_note();
                }
                None
            }
            Phase::Capturing => {
                if self
                    .capture
                    .window_elapsed(now_us, self.config.input_window_us)
                {
                    self.evaluate(now_us)
                } else {
                    None
                }
            }
            Phase::Idle | Phase::GameOver => None,
        }
    }

    fn evaluate(&mut self, now_us: i64) -> Option<AudioCue> {
        let note = *self.catalog.get(self.current?)?;

        if self.capture.pressed_set() == note.fingering {
            self.score.record_correct();
            self.next_note();
            Some(AudioCue::Tone(note.name))
        } else {
            self.score.record_incorrect();
            self.capture.clear();
            self.feedback_since_us = Some(now_us);
            self.phase = Phase::Feedback;
            Some(AudioCue::Buzz)
        }
    }

    /// Pick the next note uniformly at random. Immediate repeats are
    /// allowed.
    fn next_note(&mut self) {
        self.current = Some(self.rng.gen_range(0..self.catalog.len()));
        self.capture.clear();
        self.feedback_since_us = None;
        self.phase = Phase::Capturing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Capturing | Phase::Feedback)
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn tally(&self) -> SessionScore {
        self.score
    }

    pub fn current_note(&self) -> Option<&Note> {
        self.current.and_then(|i| self.catalog.get(i))
    }

    pub fn captured_keys(&self) -> &[Valve] {
        self.capture.keys()
    }

    /// Whole seconds left on the session timer, clamped at zero.
    pub fn remaining_seconds(&self, now_us: i64) -> i64 {
        if !self.is_running() {
            return 0;
        }
        self.remaining_us(now_us).max(0) / 1_000_000
    }

    /// The feedback line, present only while showing a correct fingering.
    pub fn feedback_text(&self) -> Option<String> {
        if self.phase == Phase::Feedback {
            self.current_note().map(Note::correct_fingering_text)
        } else {
            None
        }
    }

    fn remaining_us(&self, now_us: i64) -> i64 {
        self.config.session_us - (now_us - self.started_at_us)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn session() -> PracticeSession<ChaCha8Rng> {
        PracticeSession::new(
            NoteCatalog::builtin(),
            PracticeConfig::default(),
            ChaCha8Rng::seed_from_u64(7),
        )
    }

    #[test]
    fn begins_idle_with_no_note() {
        let s = session();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.current_note().is_none());
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn start_enters_capturing_with_a_note() {
        let mut s = session();
        s.start(0);
        assert_eq!(s.phase(), Phase::Capturing);
        assert!(s.current_note().is_some());
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut s = session();
        s.start(0);
        s.handle_key(Valve::Open, 1_000_000);
        s.start(2_000_000);
        // Still the same session: the capture survives.
        assert_eq!(s.captured_keys().len(), 1);
    }

    #[test]
    fn keys_are_dropped_outside_capturing() {
        let mut s = session();
        s.handle_key(Valve::First, 0);
        assert!(s.captured_keys().is_empty());

        s.start(0);
        s.handle_key(Valve::Fourth, 100);
        s.tick(100 + 250_000); // evaluate (wrong unless the note is C4)
        if s.phase() == Phase::Feedback {
            s.handle_key(Valve::First, 300_000);
            assert!(s.captured_keys().is_empty());
        }
    }

    #[test]
    fn tick_without_input_never_evaluates() {
        let mut s = session();
        s.start(0);
        assert_eq!(s.tick(30_000_000), None);
        assert_eq!(s.phase(), Phase::Capturing);
    }

    #[test]
    fn tick_is_inert_before_start_and_after_game_over() {
        let mut s = session();
        assert_eq!(s.tick(1_000_000), None);

        s.start(0);
        assert_eq!(s.tick(60_000_000), Some(AudioCue::Fanfare));
        assert_eq!(s.phase(), Phase::GameOver);
        // The fanfare fires once.
        assert_eq!(s.tick(61_000_000), None);
    }

    #[test]
    fn remaining_seconds_counts_down_whole_seconds() {
        let mut s = session();
        s.start(0);
        assert_eq!(s.remaining_seconds(0), 60);
        assert_eq!(s.remaining_seconds(500_000), 59);
        assert_eq!(s.remaining_seconds(59_999_999), 0);
    }
}
