use crate::catalog::{Valve, ValveSet};

/// Keys collected for the current attempt.
///
/// The input window is anchored to the first keypress of the attempt, not to
/// note presentation, so the deadline stays `None` until a key arrives.
#[derive(Debug, Clone, Default)]
pub struct InputCapture {
    keys: Vec<Valve>,
    first_key_us: Option<i64>,
}

impl InputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, valve: Valve, now_us: i64) {
        if self.first_key_us.is_none() {
            self.first_key_us = Some(now_us);
        }
        self.keys.push(valve);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.first_key_us = None;
    }

    pub fn keys(&self) -> &[Valve] {
        &self.keys
    }

    pub fn has_input(&self) -> bool {
        self.first_key_us.is_some()
    }

    /// True once the input window measured from the first keypress has
    /// elapsed. Always false while no key has been pressed.
    pub fn window_elapsed(&self, now_us: i64, window_us: i64) -> bool {
        match self.first_key_us {
            Some(first) => now_us - first >= window_us,
            None => false,
        }
    }

    /// The captured keys as a set: duplicates and ordering discarded.
    pub fn pressed_set(&self) -> ValveSet {
        self.keys.iter().copied().collect()
    }
}
