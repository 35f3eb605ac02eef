//! Pitch to note-name lookup.

use crate::data_types::MAX_PITCH;

pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Resolves a pitch to a human readable note name.
pub trait NoteLookup: Send + Sync {
    /// Returns `None` for pitches the table does not know.
    fn note_name(&self, pitch: i32) -> Option<&str>;

    /// Note name or an empty string.
    fn label_or_empty(&self, pitch: i32) -> &str {
        self.note_name(pitch).unwrap_or("")
    }
}

/// MIDI note table covering pitches 0..=127, where 60 is `C4` and 0 is `C-1`.
#[derive(Clone, Debug)]
pub struct MidiNoteTable {
    labels: Vec<String>,
}

impl MidiNoteTable {
    pub fn new() -> Self {
        let labels = (0..=MAX_PITCH as i32)
            .map(|pitch| {
                let class = PITCH_CLASS_NAMES[(pitch % 12) as usize];
                let octave = pitch / 12 - 1;
                format!("{class}{octave}")
            })
            .collect();
        Self { labels }
    }
}

impl Default for MidiNoteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteLookup for MidiNoteTable {
    fn note_name(&self, pitch: i32) -> Option<&str> {
        usize::try_from(pitch)
            .ok()
            .and_then(|idx| self.labels.get(idx))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_notes() {
        let table = MidiNoteTable::new();
        assert_eq!(table.note_name(0), Some("C-1"));
        assert_eq!(table.note_name(21), Some("A0"));
        assert_eq!(table.note_name(60), Some("C4"));
        assert_eq!(table.note_name(61), Some("C#4"));
        assert_eq!(table.note_name(127), Some("G9"));
    }

    #[test]
    fn test_out_of_table_pitch_is_empty() {
        let table = MidiNoteTable::new();
        assert_eq!(table.note_name(128), None);
        assert_eq!(table.note_name(-1), None);
        assert_eq!(table.label_or_empty(200), "");
    }
}
