use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracing::info;

use crate::audio::AudioManager;
use crate::catalog::NoteCatalog;
use crate::game::{AudioCue, Phase, PracticeConfig, PracticeSession};
use crate::input::KeyBindings;
use crate::render::{Button, StaffRenderer};
use crate::util::FrameClock;

/// The single game screen.
///
/// Polls input, drives the practice state machine, executes its audio cues
/// and draws whatever it currently exposes.
pub struct PracticeScene {
    session: PracticeSession<StdRng>,
    audio: AudioManager,
    staff: StaffRenderer,
    keys: KeyBindings,
    clock: FrameClock,
    start_button: Button,
    play_again_button: Button,
}

impl PracticeScene {
    pub fn new(catalog: NoteCatalog, audio: AudioManager) -> Self {
        Self {
            session: PracticeSession::new(
                catalog,
                PracticeConfig::default(),
                StdRng::from_entropy(),
            ),
            audio,
            staff: StaffRenderer::new(),
            keys: KeyBindings::new(),
            clock: FrameClock::new(),
            start_button: Button::new(350.0, 500.0, 100.0, 50.0, "Start"),
            play_again_button: Button::new(350.0, 300.0, 100.0, 50.0, "Play Again"),
        }
    }

    pub fn update(&mut self) {
        let now = self.clock.now_us();

        match self.session.phase() {
            Phase::Idle => {
                if self.start_button.is_clicked() {
                    self.session.start(now);
                    info!("session started");
                }
            }
            Phase::GameOver => {
                if self.play_again_button.is_clicked() {
                    self.session.start(now);
                    info!("session restarted");
                }
            }
            Phase::Capturing | Phase::Feedback => {
                for valve in self.keys.poll_pressed() {
                    self.session.handle_key(valve, now);
                }
            }
        }

        if let Some(cue) = self.session.tick(now) {
            if cue == AudioCue::Fanfare {
                info!(score = self.session.score(), "session over");
            }
            self.audio.play(cue);
        }
    }

    pub fn draw(&self) {
        clear_background(WHITE);

        match self.session.phase() {
            Phase::Idle => {
                self.start_button.draw();
            }
            Phase::GameOver => {
                draw_text(
                    &format!("Your Score: {}", self.session.score()),
                    350.0,
                    270.0,
                    24.0,
                    BLACK,
                );
                self.play_again_button.draw();
            }
            Phase::Capturing | Phase::Feedback => {
                let now = self.clock.now_us();
                draw_text(
                    &format!("Time: {}", self.session.remaining_seconds(now)),
                    10.0,
                    30.0,
                    24.0,
                    BLACK,
                );
                draw_text(
                    &format!("Score: {}", self.session.score()),
                    10.0,
                    60.0,
                    24.0,
                    BLACK,
                );

                self.staff.draw_staff();
                if let Some(note) = self.session.current_note() {
                    self.staff.draw_note(note.staff_position);
                }

                if let Some(text) = self.session.feedback_text() {
                    draw_text(&text, 100.0, 420.0, 24.0, BLACK);
                }
            }
        }
    }
}
