//! A `RangeChart` hosted in a `ResizableView`.
//!
//! Layout events go to the view first; the chart is rebuilt only when the layout
//! actually changed. Visibility events go straight to the chart and never touch
//! the layout.

use crate::data_types::{ChartConfig, InstrumentRange, ViewportSize};
use crate::midi::NoteLookup;
use crate::range_chart::RangeChart;
use crate::resizable_view::{LayoutEvent, LayoutState, ResizableView};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    Layout(LayoutEvent),
    ShowInstruments(Vec<usize>),
    ToggleInstrument(usize),
    Close,
}

impl From<LayoutEvent> for PanelEvent {
    fn from(event: LayoutEvent) -> Self {
        Self::Layout(event)
    }
}

pub struct RangeChartPanel {
    view: ResizableView,
    chart: RangeChart,
}

impl RangeChartPanel {
    /// Builds the panel and performs the first structural rebuild.
    pub fn new(
        viewport: ViewportSize,
        instruments: &[InstrumentRange],
        notes: Arc<dyn NoteLookup>,
        config: ChartConfig,
        now: Instant,
    ) -> Self {
        let view = ResizableView::new(viewport, config.margin, config.resize);
        let chart = RangeChart::new(instruments, notes, config);
        Self::from_parts(view, chart, now)
    }

    /// Combines an existing view and chart and brings the chart up to the view's size.
    pub fn from_parts(view: ResizableView, mut chart: RangeChart, now: Instant) -> Self {
        chart.resize(view.state(), now);
        Self { view, chart }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.view = self.view.with_name(name);
        self
    }

    pub fn with_close_handler(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.view = self.view.with_close_handler(handler);
        self
    }

    pub fn layout(&self) -> &LayoutState {
        self.view.state()
    }

    pub fn chart(&self) -> &RangeChart {
        &self.chart
    }

    /// Routes an event; returns whether anything needs repainting.
    pub fn handle(&mut self, event: PanelEvent, now: Instant) -> bool {
        match event {
            PanelEvent::Layout(event) => {
                if !self.view.dispatch(event) {
                    return false;
                }
                self.chart.resize(self.view.state(), now);
                true
            }
            PanelEvent::ShowInstruments(indices) => {
                self.chart.update_visible_instruments(&indices, now);
                true
            }
            PanelEvent::ToggleInstrument(index) => self.chart.toggle_instrument(index, now),
            PanelEvent::Close => self.view.close(),
        }
    }

    pub fn on_viewport_change(&mut self, size: ViewportSize, now: Instant) -> bool {
        self.handle(LayoutEvent::ViewportChanged(size).into(), now)
    }
}
