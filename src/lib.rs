//! instrument_ranges crate: a GPUI chart of instrument pitch ranges in a resizable panel

pub mod axis_renderer;
pub mod chart_view;
pub mod data_types;
pub mod midi;
pub mod panel;
pub mod plot_types;
pub mod range_chart;
pub mod reference;
pub mod rendering;
pub mod resizable_view;
pub mod scales;
pub mod theme;
pub mod transform;
pub mod transition;
pub mod utils;
pub mod view_controller;

pub use chart_view::{RangeChartEvent, RangeChartView};
pub use data_types::{ChartConfig, InstrumentCategory, InstrumentRange, Margin, ViewportSize};
pub use midi::{MidiNoteTable, NoteLookup};
pub use panel::{PanelEvent, RangeChartPanel};
pub use range_chart::{ChartPhase, RangeChart};
pub use resizable_view::{LayoutEvent, LayoutState, ResizableView};
