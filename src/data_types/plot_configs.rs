use super::layout::{Margin, ResizeConfig};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margin: Margin,
    pub resize: ResizeConfig,
    /// Duration of the bar entrance animation.
    pub transition_duration: Duration,
    /// Baseline of the legend labels, from the top of the panel.
    pub legend_y: f32,
    pub heading: String,
    /// Baseline of the heading, from the top of the panel.
    pub heading_y: f32,
    pub x_axis_title: String,
    /// Number of octaves marked on the x axis and in the grid.
    pub octaves: u8,
    /// Fraction of each band left empty above and below a bar.
    pub band_padding_pct: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::range_chart(),
            resize: ResizeConfig::default(),
            transition_duration: Duration::from_millis(500),
            legend_y: 45.0,
            heading: "Instrument Note Ranges".to_string(),
            heading_y: 20.0,
            x_axis_title: "Note range".to_string(),
            octaves: 10,
            band_padding_pct: 0.1,
        }
    }
}

impl ChartConfig {
    /// Parses a configuration; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }
}
