use gpui::prelude::*;
use gpui::*;
use instrument_ranges::chart_view::{
    ClosePanel, DecreaseColumns, DecreaseRows, IncreaseColumns, IncreaseRows,
};
use instrument_ranges::reference::builtin_instrument_ranges;
use instrument_ranges::utils::PixelsExt;
use instrument_ranges::{
    ChartConfig, InstrumentRange, MidiNoteTable, RangeChartEvent, RangeChartView, ViewportSize,
};
use std::sync::Arc;

struct DemoApp {
    chart: Option<Entity<RangeChartView>>,
    _subscriptions: Vec<Subscription>,
}

impl DemoApp {
    fn new(instruments: &[InstrumentRange], window: &mut Window, cx: &mut Context<Self>) -> Self {
        let viewport = Self::viewport_for(window);
        let chart = cx.new(|cx| {
            RangeChartView::new(
                "Note-Time Chart",
                viewport,
                instruments,
                Arc::new(MidiNoteTable::new()),
                ChartConfig::default(),
                cx,
            )
        });

        let subscriptions = vec![
            cx.observe_window_bounds(window, |this, window, cx| {
                let size = Self::viewport_for(window);
                if let Some(chart) = &this.chart {
                    chart.update(cx, |view, cx| view.set_viewport(size, cx));
                }
            }),
            cx.subscribe(&chart, |this, _, event: &RangeChartEvent, cx| match event {
                RangeChartEvent::Closed(name) => {
                    tracing::info!(panel = %name, "panel closed");
                    this.chart = None;
                    cx.notify();
                }
            }),
        ];

        Self {
            chart: Some(chart),
            _subscriptions: subscriptions,
        }
    }

    /// One grid cell: the window minus the page chrome around the panel.
    fn viewport_for(window: &Window) -> ViewportSize {
        let size = window.viewport_size();
        ViewportSize::new(
            (size.width.as_f32() - 20.0).floor(),
            (size.height.as_f32() - 100.0).floor(),
        )
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .overflow_hidden()
            .p(px(10.0))
            .bg(rgb(0x121212))
            .children(self.chart.clone())
    }
}

fn main() -> eyre::Result<()> {
    let instruments = builtin_instrument_ranges()?;

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("ctrl-down", IncreaseRows, None),
            KeyBinding::new("ctrl-up", DecreaseRows, None),
            KeyBinding::new("ctrl-right", IncreaseColumns, None),
            KeyBinding::new("ctrl-left", DecreaseColumns, None),
            KeyBinding::new("ctrl-w", ClosePanel, None),
        ]);

        let opened = cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| DemoApp::new(&instruments, window, cx))
        });
        if let Err(err) = opened {
            tracing::error!(%err, "failed to open window");
            cx.quit();
        }
    });
    Ok(())
}
