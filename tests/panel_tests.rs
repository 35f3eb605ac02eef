use instrument_ranges::resizable_view::LayoutEvent;
use instrument_ranges::{
    ChartConfig, InstrumentCategory, InstrumentRange, MidiNoteTable, PanelEvent, RangeChartPanel,
    ViewportSize,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

fn panel(width: f32) -> RangeChartPanel {
    let instruments = vec![
        InstrumentRange::new("Piano", InstrumentCategory::Keys, 21, 108),
        InstrumentRange::new("Violin", InstrumentCategory::Strings, 55, 103),
    ];
    RangeChartPanel::new(
        ViewportSize::new(width, 500.0),
        &instruments,
        Arc::new(MidiNoteTable::new()),
        ChartConfig::default(),
        Instant::now(),
    )
}

#[test]
fn test_viewport_growth_rebuilds_once() {
    let mut panel = panel(800.0);
    assert_eq!(panel.chart().rebuild_count(), 1);
    assert_eq!(panel.chart().width(), 600.0);

    assert!(panel.on_viewport_change(ViewportSize::new(1000.0, 500.0), Instant::now()));
    assert_eq!(panel.layout().view_width(), 1000.0);
    assert_eq!(panel.chart().width(), 800.0);
    assert_eq!(panel.chart().rebuild_count(), 2);
}

#[test]
fn test_unchanged_viewport_does_not_rebuild() {
    let mut panel = panel(1000.0);
    assert!(!panel.on_viewport_change(ViewportSize::new(1000.0, 500.0), Instant::now()));
    assert_eq!(panel.chart().rebuild_count(), 1);
}

#[test]
fn test_span_at_limit_does_not_rebuild() {
    let mut panel = panel(1000.0);
    let now = Instant::now();
    assert!(panel.handle(LayoutEvent::IncreaseColumns.into(), now));
    assert!(!panel.handle(LayoutEvent::IncreaseColumns.into(), now));
    assert_eq!(panel.chart().rebuild_count(), 2);
    assert_eq!(panel.chart().width(), 1800.0);
}

#[test]
fn test_resize_keeps_selection() {
    let mut panel = panel(1000.0);
    let now = Instant::now();
    assert!(panel.handle(PanelEvent::ShowInstruments(vec![1]), now));
    assert!(panel.handle(LayoutEvent::IncreaseRows.into(), now));
    assert_eq!(panel.chart().shown_instruments(), &[1]);
    assert_eq!(panel.chart().bars().len(), 1);
    assert_eq!(panel.chart().bars()[0].label, "Violin");
}

#[test]
fn test_visibility_events_leave_layout_alone() {
    let mut panel = panel(1000.0);
    let now = Instant::now();
    assert!(panel.handle(PanelEvent::ToggleInstrument(0), now));
    assert_eq!(panel.chart().rebuild_count(), 1);
    assert!(!panel.handle(PanelEvent::ToggleInstrument(42), now));
}

#[test]
fn test_close_reaches_container() {
    let closed = Rc::new(RefCell::new(None));
    let sink = closed.clone();
    let mut panel = panel(1000.0)
        .with_name("Note-Time Chart")
        .with_close_handler(move |name| *sink.borrow_mut() = Some(name.to_string()));

    assert!(panel.handle(PanelEvent::Close, Instant::now()));
    assert_eq!(closed.borrow().as_deref(), Some("Note-Time Chart"));
}
