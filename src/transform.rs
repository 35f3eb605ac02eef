//! Transform helper for coordinate projection

use crate::scales::{BandScale, ChartScale};

/// Pitch scale on X and instrument band scale on Y, both in drawable-area pixels.
#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: BandScale,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: BandScale) -> Self {
        Self { x_scale, y_scale }
    }

    pub fn x_data_to_screen(&self, pitch: f64) -> f32 {
        self.x_scale.map(pitch)
    }

    /// Pixel length of a pitch span; the X domain and range both start at zero.
    pub fn x_extent_to_screen(&self, semitones: f64) -> f32 {
        self.x_scale.map(semitones)
    }

    pub fn band_start(&self, label: &str) -> Option<f32> {
        self.y_scale.map(label)
    }

    pub fn bandwidth(&self) -> f32 {
        self.y_scale.bandwidth()
    }
}
