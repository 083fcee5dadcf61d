use super::{Valve, ValveSet};

/// One playable note.
///
/// `staff_position` is the signed offset from the middle staff line in
/// half-line steps: 0 is the middle line, positive is upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub name: &'static str,
    pub staff_position: i32,
    pub fingering: ValveSet,
    pub frequency: f32,
}

impl Note {
    /// Feedback line shown after a wrong answer.
    pub fn correct_fingering_text(&self) -> String {
        format!("{} Correct Fingering: {}", self.name, self.fingering.labels())
    }
}

const BUILTIN_NOTES: &[Note] = &[
    Note {
        name: "Bb3",
        staff_position: -2,
        fingering: ValveSet::of(&[Valve::Open]),
        frequency: 233.08,
    },
    Note {
        name: "C4",
        staff_position: -1,
        fingering: ValveSet::of(&[Valve::Fourth]),
        frequency: 261.63,
    },
    Note {
        name: "D4",
        staff_position: 0,
        fingering: ValveSet::of(&[Valve::First, Valve::Second]),
        frequency: 293.66,
    },
    Note {
        name: "Eb4",
        staff_position: 1,
        fingering: ValveSet::of(&[Valve::First]),
        frequency: 311.13,
    },
    Note {
        name: "F4",
        staff_position: 2,
        fingering: ValveSet::of(&[Valve::Open]),
        frequency: 349.23,
    },
    Note {
        name: "G4",
        staff_position: 3,
        fingering: ValveSet::of(&[Valve::First, Valve::Second]),
        frequency: 392.00,
    },
];

/// Fixed ordered sequence of playable notes. Built once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct NoteCatalog {
    notes: Vec<Note>,
}

impl NoteCatalog {
    /// The built-in drill table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_NOTES.to_vec())
    }

    /// Catalog over an explicit note list.
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Lookup by note name, used to resolve audio assets.
    pub fn by_name(&self, name: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fingering_is_nonempty() {
        for note in NoteCatalog::builtin().notes() {
            assert!(!note.fingering.is_empty(), "{} has no fingering", note.name);
        }
    }

    #[test]
    fn every_fingering_uses_recognized_valves_only() {
        // ValveSet can only hold the five recognized valves; check that each
        // note's set is reachable from Valve::ALL alone.
        for note in NoteCatalog::builtin().notes() {
            let rebuilt: ValveSet = Valve::ALL
                .into_iter()
                .filter(|v| note.fingering.contains(*v))
                .collect();
            assert_eq!(rebuilt, note.fingering);
        }
    }

    #[test]
    fn by_name_finds_each_note() {
        let catalog = NoteCatalog::builtin();
        for note in catalog.notes() {
            assert_eq!(catalog.by_name(note.name).map(|n| n.name), Some(note.name));
        }
        assert!(catalog.by_name("Z9").is_none());
    }

    #[test]
    fn d4_requires_first_and_second() {
        let catalog = NoteCatalog::builtin();
        let d4 = catalog.by_name("D4").unwrap();
        assert_eq!(d4.fingering, ValveSet::of(&[Valve::First, Valve::Second]));
        assert_eq!(d4.staff_position, 0);
    }

    #[test]
    fn frequencies_ascend_with_the_table() {
        let catalog = NoteCatalog::builtin();
        for pair in catalog.notes().windows(2) {
            assert!(pair[0].frequency < pair[1].frequency);
        }
    }

    #[test]
    fn correct_fingering_text_joins_labels() {
        let d4 = *NoteCatalog::builtin().by_name("D4").unwrap();
        assert_eq!(d4.correct_fingering_text(), "D4 Correct Fingering: 1 + 2");
    }
}
