//! Instrument Range Chart
//!
//! `RangeChart` owns the coordinate mapping and geometry of the instrument range
//! visualization. It moves from `Uninitialized` to `Initialized` on its first
//! structural rebuild and stays there:
//!
//! - `rebuild_scales_and_axes` runs whenever the drawable size changes. It rebuilds
//!   the pitch scale, the octave ticks and the x axis, and empties the band domain.
//! - `update_visible_instruments` runs whenever the visible set changes (and after
//!   every rebuild). It refills the band domain and the y axis, lays out the bars
//!   and restarts their entrance animation.
//!
//! Everything is recomputed from the current inputs; nothing carries over from the
//! previous frame except the visible selection.

use crate::axis_renderer::AxisRenderer;
use crate::data_types::{
    sorted_for_display, ChartConfig, DrawCommand, InstrumentCategory, InstrumentRange, Margin,
    TextAnchor, MAX_PITCH,
};
use crate::midi::NoteLookup;
use crate::plot_types::{PlotRenderer, RangeBar, RangeBarPlot};
use crate::resizable_view::LayoutState;
use crate::scales::{BandScale, ChartScale};
use crate::theme::{CategoryColorMap, ChartTheme};
use crate::transform::PlotTransform;
use crate::transition::BarTransition;
use crate::utils::PixelsExt;
use crate::view_controller::ViewController;
use gpui::{Bounds, Hsla, Point, Size};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartPhase {
    Uninitialized,
    Initialized,
}

/// One coloured legend label.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub category: InstrumentCategory,
    pub color: Hsla,
    /// Panel coordinates of the label's left edge and baseline.
    pub x: f32,
    pub y: f32,
}

pub struct RangeChart {
    config: ChartConfig,
    theme: ChartTheme,
    instruments: Vec<InstrumentRange>,
    shown: Vec<usize>,
    notes: Arc<dyn NoteLookup>,
    colors: CategoryColorMap,
    renderer: Box<dyn PlotRenderer>,

    phase: ChartPhase,
    margin: Margin,
    view_width: f32,
    view_height: f32,
    width: f32,
    height: f32,
    transform: PlotTransform,
    x_axis: Option<DrawCommand>,
    y_axis: Option<DrawCommand>,
    bars: Vec<RangeBar>,
    transition: Option<BarTransition>,
    rebuilds: u64,
}

impl RangeChart {
    /// Instruments are sorted into display order; all of them start visible.
    pub fn new(
        instruments: &[InstrumentRange],
        notes: Arc<dyn NoteLookup>,
        config: ChartConfig,
    ) -> Self {
        let instruments = sorted_for_display(instruments);
        let shown = (0..instruments.len()).collect();
        let colors = CategoryColorMap::default();
        let renderer = RangeBarPlot::new(colors.clone(), notes.clone())
            .with_band_padding(config.band_padding_pct);
        Self {
            margin: config.margin,
            config,
            theme: ChartTheme::default(),
            instruments,
            shown,
            notes,
            colors,
            renderer: Box::new(renderer),
            phase: ChartPhase::Uninitialized,
            view_width: 0.0,
            view_height: 0.0,
            width: 0.0,
            height: 0.0,
            transform: PlotTransform::new(
                ChartScale::new_linear((0.0, MAX_PITCH as f64), (0.0, 0.0)),
                BandScale::new((0.0, 0.0)),
            ),
            x_axis: None,
            y_axis: None,
            bars: Vec::new(),
            transition: None,
            rebuilds: 0,
        }
    }

    /// Replaces the category colours, and the bar renderer with one using them.
    pub fn with_color_map(mut self, colors: CategoryColorMap) -> Self {
        self.renderer = Box::new(
            RangeBarPlot::new(colors.clone(), self.notes.clone())
                .with_band_padding(self.config.band_padding_pct),
        );
        self.colors = colors;
        self
    }

    pub fn phase(&self) -> ChartPhase {
        self.phase
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn instruments(&self) -> &[InstrumentRange] {
        &self.instruments
    }

    pub fn shown_instruments(&self) -> &[usize] {
        &self.shown
    }

    pub fn colors(&self) -> &CategoryColorMap {
        &self.colors
    }

    pub fn transform(&self) -> &PlotTransform {
        &self.transform
    }

    /// Bars at their final size.
    pub fn bars(&self) -> &[RangeBar] {
        &self.bars
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    /// Number of structural rebuilds performed so far.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Rebuilds the pitch scale, the x axis and an empty band scale for the
    /// layout's drawable area. Previously drawn axes and bars are discarded.
    pub fn rebuild_scales_and_axes(&mut self, layout: &LayoutState) {
        self.margin = layout.margin();
        self.view_width = layout.view_width();
        self.view_height = layout.view_height();
        self.width = layout.width().max(0.0);
        self.height = layout.height().max(0.0);

        let x_scale = ChartScale::new_linear((0.0, MAX_PITCH as f64), (0.0, self.width));
        let x_ticks = AxisRenderer::pitch_ticks(&x_scale, self.config.octaves, self.notes.as_ref());
        self.x_axis = Some(AxisRenderer::bottom_axis(
            &x_ticks,
            x_scale.range(),
            self.height,
            &self.theme,
        ));
        self.transform = PlotTransform::new(x_scale, BandScale::new((0.0, self.height)));
        self.y_axis = None;
        self.bars.clear();
        self.transition = None;

        self.phase = ChartPhase::Initialized;
        self.rebuilds += 1;
        tracing::debug!(
            width = self.width,
            height = self.height,
            rebuilds = self.rebuilds,
            "rebuilt scales and axes"
        );
    }

    /// Structural rebuild followed by a refresh of the current selection.
    pub fn resize(&mut self, layout: &LayoutState, now: Instant) {
        self.rebuild_scales_and_axes(layout);
        let shown = self.shown.clone();
        self.update_visible_instruments(&shown, now);
    }

    /// Sets the visible instruments (indices into `instruments()`), in stacking
    /// order from top to bottom. Unknown indices and repeats are dropped.
    ///
    /// Before the first rebuild only the selection is stored.
    pub fn update_visible_instruments(&mut self, shown: &[usize], now: Instant) {
        let mut selection = Vec::with_capacity(shown.len());
        for &idx in shown {
            if idx >= self.instruments.len() {
                tracing::warn!(index = idx, count = self.instruments.len(), "ignoring unknown instrument index");
                continue;
            }
            if !selection.contains(&idx) {
                selection.push(idx);
            }
        }
        self.shown = selection;

        if self.phase == ChartPhase::Uninitialized {
            tracing::trace!(shown = self.shown.len(), "chart not initialized, selection stored");
            return;
        }

        let labels: Vec<&str> = self
            .shown
            .iter()
            .map(|&idx| self.instruments[idx].label.as_str())
            .collect();
        self.transform.y_scale.set_domain(labels);

        let y_ticks = AxisRenderer::band_ticks(&self.transform.y_scale);
        self.y_axis = Some(AxisRenderer::left_axis(
            &y_ticks,
            self.transform.y_scale.range(),
            &self.theme,
        ));

        self.bars = self
            .renderer
            .layout(&self.instruments, &self.shown, &self.transform);
        self.transition = Some(BarTransition::new(now, self.config.transition_duration));
        tracing::trace!(
            shown = self.shown.len(),
            bars = self.bars.len(),
            bandwidth = self.transform.bandwidth(),
            "updated visible instruments"
        );
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.contains(&index)
    }

    /// Adds an instrument to the visible set, placed before the first shown
    /// instrument that follows it in display order. Returns whether it changed.
    pub fn show_instrument(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.instruments.len() {
            tracing::warn!(index, "cannot show unknown instrument");
            return false;
        }
        if self.is_shown(index) {
            return false;
        }
        let mut shown = self.shown.clone();
        let at = shown.iter().position(|&i| i > index).unwrap_or(shown.len());
        shown.insert(at, index);
        self.update_visible_instruments(&shown, now);
        true
    }

    /// Removes an instrument from the visible set. Returns whether it changed.
    pub fn hide_instrument(&mut self, index: usize, now: Instant) -> bool {
        if !self.is_shown(index) {
            return false;
        }
        let shown: Vec<usize> = self.shown.iter().copied().filter(|&i| i != index).collect();
        self.update_visible_instruments(&shown, now);
        true
    }

    pub fn toggle_instrument(&mut self, index: usize, now: Instant) -> bool {
        if self.is_shown(index) {
            self.hide_instrument(index, now)
        } else {
            self.show_instrument(index, now)
        }
    }

    /// True while the bar entrance animation is still running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| !t.is_finished(now) && !self.bars.is_empty())
    }

    /// Eased animation progress; 1.0 when no animation is running.
    pub fn animation_progress(&self, now: Instant) -> f32 {
        self.transition.as_ref().map_or(1.0, |t| t.progress(now))
    }

    /// Bar under a drawable-area point, using the final bar geometry.
    pub fn bar_at(&self, x: f32, y: f32) -> Option<&RangeBar> {
        let y_scale = &self.transform.y_scale;
        let label = y_scale.domain().get(y_scale.band_at(y)?)?;
        self.bars
            .iter()
            .find(|bar| &bar.label == label && bar.contains(x, y))
    }

    /// One label per colour map entry, spread evenly across the drawable width.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let positions =
            ViewController::evenly_spaced(self.margin.left, self.width, self.colors.len());
        self.colors
            .iter()
            .zip(positions)
            .map(|((category, color), x)| LegendEntry {
                category,
                color,
                x,
                y: self.config.legend_y,
            })
            .collect()
    }

    pub fn render_legend(&self) -> DrawCommand {
        let size = self.theme.legend_label_size.as_f32();
        let children = self
            .legend_entries()
            .into_iter()
            .map(|entry| DrawCommand::Text {
                text: entry.category.name().to_string(),
                origin: Point::new(entry.x, baseline_to_centre(entry.y, size)),
                anchor: TextAnchor::Start,
                color: entry.color,
                size,
            })
            .collect();
        DrawCommand::group("legend", children)
    }

    /// One-pixel markers at every octave boundary, full drawable height, in
    /// drawable-area coordinates. Empty before the first rebuild.
    pub fn render_octave_gridlines(&self) -> DrawCommand {
        if self.phase == ChartPhase::Uninitialized {
            return DrawCommand::group("octave-markers", Vec::new());
        }
        let y0 = self.transform.y_scale.range().0;
        let children = AxisRenderer::octave_pitches(self.config.octaves)
            .into_iter()
            .map(|pitch| DrawCommand::Rect {
                bounds: Bounds::new(
                    Point::new(self.transform.x_data_to_screen(pitch as f64), y0),
                    Size::new(1.0, self.height),
                ),
                fill: Some(self.theme.grid_line),
                tooltip: None,
            })
            .collect();
        DrawCommand::group("octave-markers", children)
    }

    /// Bars scaled by the animation state at `now`, in drawable-area coordinates.
    pub fn render_bars(&self, now: Instant) -> DrawCommand {
        let progress = self.animation_progress(now);
        DrawCommand::group(
            "bars",
            self.bars.iter().map(|bar| bar.to_command(progress)).collect(),
        )
    }

    /// The complete scene at `now`, in panel coordinates.
    pub fn frame(&self, now: Instant) -> Vec<DrawCommand> {
        let (dx, dy) = (self.margin.left, self.margin.top);
        let mut commands = vec![
            DrawCommand::Text {
                text: self.config.heading.clone(),
                origin: Point::new(
                    self.view_width / 2.0,
                    baseline_to_centre(self.config.heading_y, self.theme.heading_size.as_f32()),
                ),
                anchor: TextAnchor::Middle,
                color: self.theme.heading,
                size: self.theme.heading_size.as_f32(),
            },
            self.render_legend(),
            self.render_octave_gridlines().translate(dx, dy),
        ];
        if let Some(axis) = &self.x_axis {
            commands.push(axis.clone().translate(dx, dy));
        }
        if let Some(axis) = &self.y_axis {
            commands.push(axis.clone().translate(dx, dy));
        }
        commands.push(self.render_bars(now).translate(dx, dy));
        commands.push(self.render_octave_gridlines().translate(dx, dy));
        commands.push(DrawCommand::Text {
            text: self.config.x_axis_title.clone(),
            origin: Point::new(
                self.view_width / 2.0,
                baseline_to_centre(self.view_height - 5.0, self.theme.axis_label_size.as_f32()),
            ),
            anchor: TextAnchor::Middle,
            color: self.theme.axis_label,
            size: self.theme.axis_label_size.as_f32(),
        });
        commands
    }
}

/// Text is positioned by its vertical centre; labels configured by baseline sit
/// half a font size above it.
fn baseline_to_centre(baseline: f32, font_size: f32) -> f32 {
    baseline - font_size / 2.0
}
