use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Highest pitch of the MIDI note domain.
pub const MAX_PITCH: u8 = 127;

/// Instrument family, used for grouping and colouring.
///
/// Variant order is the display order (alphabetical by name).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InstrumentCategory {
    Brass,
    Keys,
    Strings,
    #[serde(rename = "Tuned percussion")]
    TunedPercussion,
    Woodwind,
}

impl InstrumentCategory {
    pub const ALL: [InstrumentCategory; 5] = [
        Self::Brass,
        Self::Keys,
        Self::Strings,
        Self::TunedPercussion,
        Self::Woodwind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Brass => "Brass",
            Self::Keys => "Keys",
            Self::Strings => "Strings",
            Self::TunedPercussion => "Tuned percussion",
            Self::Woodwind => "Woodwind",
        }
    }
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playable pitch range of one instrument, both ends inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRange {
    pub label: String,
    #[serde(rename = "type")]
    pub category: InstrumentCategory,
    pub min: u8,
    pub max: u8,
}

impl InstrumentRange {
    pub fn new(label: impl Into<String>, category: InstrumentCategory, min: u8, max: u8) -> Self {
        Self {
            label: label.into(),
            category,
            min,
            max,
        }
    }

    /// Number of playable semitones, counting both endpoints.
    pub fn semitones(&self) -> u8 {
        self.max.saturating_sub(self.min).saturating_add(1)
    }

    /// Ordering used for display grouping: category, then lowest note, then highest note.
    pub fn display_order(a: &Self, b: &Self) -> Ordering {
        a.category
            .cmp(&b.category)
            .then(a.min.cmp(&b.min))
            .then(a.max.cmp(&b.max))
    }
}

/// Sorts a copy of the given ranges into display order. The sort is stable,
/// so ties keep their input order.
pub fn sorted_for_display(ranges: &[InstrumentRange]) -> Vec<InstrumentRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(InstrumentRange::display_order);
    sorted
}
