// Plot types module

pub mod range_bar;

pub use range_bar::RangeBarPlot;

use crate::data_types::{DrawCommand, InstrumentCategory, InstrumentRange};
use crate::transform::PlotTransform;
use gpui::{Bounds, Hsla, Point, Size};

/// Geometry of one instrument's bar, in drawable-area pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBar {
    /// Index into the chart's sorted instrument list.
    pub index: usize,
    pub label: String,
    pub category: InstrumentCategory,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Hsla>,
    pub tooltip: String,
}

impl RangeBar {
    pub fn bounds(&self) -> Bounds<f32> {
        Bounds::new(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }

    /// Bounds with width and height scaled by `progress`; the origin stays put.
    pub fn bounds_at(&self, progress: f32) -> Bounds<f32> {
        Bounds::new(
            Point::new(self.x, self.y),
            Size::new(self.width * progress, self.height * progress),
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn to_command(&self, progress: f32) -> DrawCommand {
        DrawCommand::Rect {
            bounds: self.bounds_at(progress),
            fill: self.fill,
            tooltip: Some(self.tooltip.clone()),
        }
    }
}

/// Strategy turning instrument data and scales into bar geometry.
pub trait PlotRenderer: Send + Sync {
    /// One bar per entry of `visible` (indices into `data`) that has a band in the transform.
    fn layout(
        &self,
        data: &[InstrumentRange],
        visible: &[usize],
        transform: &PlotTransform,
    ) -> Vec<RangeBar>;

    /// Draw commands for the fully grown bars.
    fn compute_geometry(
        &self,
        data: &[InstrumentRange],
        visible: &[usize],
        transform: &PlotTransform,
    ) -> Vec<DrawCommand> {
        self.layout(data, visible, transform)
            .iter()
            .map(|bar| bar.to_command(1.0))
            .collect()
    }
}
