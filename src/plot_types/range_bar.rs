use super::{PlotRenderer, RangeBar};
use crate::data_types::InstrumentRange;
use crate::midi::NoteLookup;
use crate::theme::CategoryColorMap;
use crate::transform::PlotTransform;
use std::sync::Arc;

/// Horizontal bars spanning each instrument's lowest to highest note.
#[derive(Clone)]
pub struct RangeBarPlot {
    pub colors: CategoryColorMap,
    pub notes: Arc<dyn NoteLookup>,
    /// Fraction of the band left empty above and below each bar.
    pub band_padding_pct: f32,
}

impl RangeBarPlot {
    pub fn new(colors: CategoryColorMap, notes: Arc<dyn NoteLookup>) -> Self {
        Self {
            colors,
            notes,
            band_padding_pct: 0.1,
        }
    }

    pub fn with_band_padding(mut self, pct: f32) -> Self {
        self.band_padding_pct = pct.clamp(0.0, 0.5);
        self
    }

    /// `"{label}: {low note} - {high note} ({min} - {max})"`.
    pub fn tooltip(&self, instrument: &InstrumentRange) -> String {
        format!(
            "{}: {} - {} ({} - {})",
            instrument.label,
            self.notes.label_or_empty(instrument.min as i32),
            self.notes.label_or_empty(instrument.max as i32),
            instrument.min,
            instrument.max
        )
    }

    pub fn bar(
        &self,
        index: usize,
        instrument: &InstrumentRange,
        transform: &PlotTransform,
    ) -> Option<RangeBar> {
        let band_start = transform.band_start(&instrument.label)?;
        let bandwidth = transform.bandwidth();
        // Endpoints are inclusive, so a single-note range still gets one semitone of width.
        let semitones = instrument.semitones() as f64;
        Some(RangeBar {
            index,
            label: instrument.label.clone(),
            category: instrument.category,
            x: transform.x_data_to_screen(instrument.min as f64),
            y: band_start + self.band_padding_pct * bandwidth,
            width: transform.x_extent_to_screen(semitones),
            height: (1.0 - 2.0 * self.band_padding_pct) * bandwidth,
            fill: self.colors.get(instrument.category),
            tooltip: self.tooltip(instrument),
        })
    }
}

impl PlotRenderer for RangeBarPlot {
    fn layout(
        &self,
        data: &[InstrumentRange],
        visible: &[usize],
        transform: &PlotTransform,
    ) -> Vec<RangeBar> {
        visible
            .iter()
            .filter_map(|&idx| {
                let instrument = data.get(idx)?;
                self.bar(idx, instrument, transform)
            })
            .collect()
    }
}
