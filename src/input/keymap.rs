use macroquad::prelude::*;

use crate::catalog::Valve;

/// Keyboard bindings for the five fingering keys.
pub struct KeyBindings {
    bindings: [(KeyCode, Valve); 5],
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: [
                (KeyCode::Space, Valve::Open),
                (KeyCode::J, Valve::First),
                (KeyCode::K, Valve::Second),
                (KeyCode::L, Valve::Third),
                (KeyCode::Semicolon, Valve::Fourth),
            ],
        }
    }

    /// The valve bound to a key, or `None` for unrecognized keys.
    pub fn valve_for(&self, key: KeyCode) -> Option<Valve> {
        self.bindings
            .iter()
            .find(|(code, _)| *code == key)
            .map(|(_, valve)| *valve)
    }

    /// Valves whose keys went down this frame.
    pub fn poll_pressed(&self) -> Vec<Valve> {
        self.bindings
            .iter()
            .filter(|(code, _)| is_key_pressed(*code))
            .map(|(_, valve)| *valve)
            .collect()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
