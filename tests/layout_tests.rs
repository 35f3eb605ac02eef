use instrument_ranges::data_types::{Margin, ResizeConfig, ViewportSize};
use instrument_ranges::{LayoutEvent, LayoutState, ResizableView};
use std::cell::RefCell;
use std::rc::Rc;

fn view() -> ResizableView {
    ResizableView::new(
        ViewportSize::new(1000.0, 500.0),
        Margin::range_chart(),
        ResizeConfig::default(),
    )
}

#[test]
fn test_initial_dimensions() {
    let view = view();
    let state = view.state();
    assert_eq!(state.view_width(), 1000.0);
    assert_eq!(state.view_height(), 500.0);
    assert_eq!(state.width(), 800.0);
    assert_eq!(state.height(), 400.0);
    assert_eq!(state.grid_area(), "span 1 / span 1");
}

#[test]
fn test_row_span_saturates_at_limit() {
    let mut view = view();
    let limit = view.state().config().row_limit;
    for _ in 0..limit + 5 {
        view.increase_row_span();
    }
    assert_eq!(view.state().row_span(), limit);
    assert_eq!(view.state().view_height(), 500.0 * limit as f32);
    assert!(!view.state().can_increase_rows());

    for _ in 0..limit + 5 {
        view.decrease_row_span();
    }
    assert_eq!(view.state().row_span(), 1);
    assert!(!view.state().can_decrease_rows());
}

#[test]
fn test_column_span_changes_width() {
    let mut view = view();
    assert!(view.increase_column_span());
    assert_eq!(view.state().column_span(), 2);
    assert_eq!(view.state().view_width(), 2000.0);
    assert_eq!(view.state().width(), 1800.0);
    assert_eq!(view.state().grid_area(), "span 1 / span 2");
    // Default column limit is two
    assert!(!view.increase_column_span());
    assert!(view.decrease_column_span());
    assert_eq!(view.state().width(), 800.0);
}

#[test]
fn test_disabled_rows_ignore_requests() {
    let config = ResizeConfig {
        can_resize_rows: false,
        ..ResizeConfig::default()
    };
    let mut view = ResizableView::new(ViewportSize::new(1000.0, 500.0), Margin::range_chart(), config);
    assert!(!view.increase_row_span());
    assert!(!view.state().can_increase_rows());
    assert_eq!(view.state().row_span(), 1);
    // Columns are unaffected
    assert!(view.increase_column_span());
}

#[test]
fn test_initial_span_is_clamped() {
    let config = ResizeConfig {
        row_span: 40,
        column_span: 0,
        ..ResizeConfig::default()
    };
    let state = LayoutState::new(ViewportSize::new(100.0, 100.0), Margin::default(), config);
    assert_eq!(state.row_span(), 12);
    assert_eq!(state.column_span(), 1);
}

#[test]
fn test_same_viewport_is_noop() {
    let state = *view().state();
    assert_eq!(
        state.apply(LayoutEvent::ViewportChanged(ViewportSize::new(1000.0, 500.0))),
        None
    );
    let next = state
        .apply(LayoutEvent::ViewportChanged(ViewportSize::new(1200.0, 500.0)))
        .expect("layout change");
    assert_eq!(next.width(), 1000.0);
}

#[test]
fn test_width_invariant_holds_for_small_viewports() {
    let mut view = view();
    view.on_viewport_change(ViewportSize::new(150.0, 80.0));
    let state = view.state();
    let margin = state.margin();
    assert_eq!(state.width(), state.view_width() - margin.left - margin.right);
    assert_eq!(state.height(), state.view_height() - margin.top - margin.bottom);
    assert!(state.width() < 0.0);
}

#[test]
fn test_negative_viewport_is_floored() {
    let size = ViewportSize::new(-10.0, 20.0);
    assert_eq!(size.outer_width, 0.0);
    assert_eq!(size.outer_height, 20.0);
}

#[test]
fn test_redraw_hook_fires_once_per_change() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let mut view = view().with_redraw_hook(move |state| sink.borrow_mut().push(state.width()));

    view.on_viewport_change(ViewportSize::new(1000.0, 500.0));
    assert!(calls.borrow().is_empty());

    view.on_viewport_change(ViewportSize::new(1200.0, 500.0));
    view.decrease_column_span();
    view.increase_column_span();
    assert_eq!(*calls.borrow(), vec![1000.0, 2200.0]);
}

#[test]
fn test_close_requires_handler_and_name() {
    let closed = Rc::new(RefCell::new(Vec::<String>::new()));

    let mut unnamed = {
        let sink = closed.clone();
        view().with_close_handler(move |name| sink.borrow_mut().push(name.to_string()))
    };
    assert!(!unnamed.close());

    let mut no_handler = view().with_name("Note-Time Chart");
    assert!(!no_handler.close());
    assert!(closed.borrow().is_empty());

    let mut named = {
        let sink = closed.clone();
        view()
            .with_name("Note-Time Chart")
            .with_close_handler(move |name| sink.borrow_mut().push(name.to_string()))
    };
    assert!(named.close());
    assert_eq!(*closed.borrow(), vec!["Note-Time Chart".to_string()]);
}
