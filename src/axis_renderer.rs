use crate::data_types::{DrawCommand, TextAnchor};
use crate::midi::NoteLookup;
use crate::scales::{BandScale, ChartScale};
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use gpui::Point;

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;

/// A single axis graduation, positioned in drawable-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub position: f32,
    pub label: String,
}

pub struct AxisRenderer;

impl AxisRenderer {
    /// Pitches of the octave boundaries `0, 12, ..., 12 * octaves`.
    pub fn octave_pitches(octaves: u8) -> Vec<i32> {
        (0..=octaves as i32).map(|k| k * 12).collect()
    }

    /// Octave ticks labelled with note names; unknown pitches get an empty label.
    pub fn pitch_ticks(scale: &ChartScale, octaves: u8, notes: &dyn NoteLookup) -> Vec<AxisTick> {
        Self::octave_pitches(octaves)
            .into_iter()
            .map(|pitch| AxisTick {
                value: pitch as f64,
                position: scale.map(pitch as f64),
                label: notes.label_or_empty(pitch).to_string(),
            })
            .collect()
    }

    /// One tick per band, centred in the band and labelled with the band's value.
    pub fn band_ticks(scale: &BandScale) -> Vec<AxisTick> {
        scale
            .domain()
            .iter()
            .enumerate()
            .filter_map(|(idx, label)| {
                scale.center(label).map(|position| AxisTick {
                    value: idx as f64,
                    position,
                    label: label.clone(),
                })
            })
            .collect()
    }

    /// Horizontal axis along `y`, ticks pointing down and labels below them.
    pub fn bottom_axis(
        ticks: &[AxisTick],
        range: (f32, f32),
        y: f32,
        theme: &ChartTheme,
    ) -> DrawCommand {
        let font_size = theme.axis_label_size.as_f32();
        let mut children = vec![DrawCommand::Line {
            from: Point::new(range.0, y),
            to: Point::new(range.1, y),
            color: theme.axis_line,
            width: 1.0,
        }];
        for tick in ticks {
            children.push(DrawCommand::Line {
                from: Point::new(tick.position, y),
                to: Point::new(tick.position, y + TICK_SIZE),
                color: theme.axis_line,
                width: 1.0,
            });
            children.push(DrawCommand::Text {
                text: tick.label.clone(),
                origin: Point::new(tick.position, y + TICK_SIZE + TICK_PADDING + font_size / 2.0),
                anchor: TextAnchor::Middle,
                color: theme.axis_label,
                size: font_size,
            });
        }
        DrawCommand::group("x-axis", children)
    }

    /// Vertical axis along `x = 0`, ticks pointing left and labels right-aligned to them.
    pub fn left_axis(ticks: &[AxisTick], range: (f32, f32), theme: &ChartTheme) -> DrawCommand {
        let font_size = theme.axis_label_size.as_f32();
        let mut children = vec![DrawCommand::Line {
            from: Point::new(0.0, range.0),
            to: Point::new(0.0, range.1),
            color: theme.axis_line,
            width: 1.0,
        }];
        for tick in ticks {
            children.push(DrawCommand::Line {
                from: Point::new(-TICK_SIZE, tick.position),
                to: Point::new(0.0, tick.position),
                color: theme.axis_line,
                width: 1.0,
            });
            children.push(DrawCommand::Text {
                text: tick.label.clone(),
                origin: Point::new(-(TICK_SIZE + TICK_PADDING), tick.position),
                anchor: TextAnchor::End,
                color: theme.axis_label,
                size: font_size,
            });
        }
        DrawCommand::group("y-axis", children)
    }
}
