pub mod actions;

use crate::data_types::{ChartConfig, InstrumentRange, ViewportSize};
use crate::midi::NoteLookup;
use crate::panel::{PanelEvent, RangeChartPanel};
use crate::rendering::paint_commands;
use crate::resizable_view::LayoutEvent;
use crate::theme::ChartTheme;
use crate::utils::PixelsExt;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

pub use actions::{ClosePanel, DecreaseColumns, DecreaseRows, IncreaseColumns, IncreaseRows};

use self::actions::ChartActionHandler;

/// Events emitted to the container hosting the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeChartEvent {
    /// The user asked to close the panel with the given name.
    Closed(SharedString),
}

pub struct RangeChartView {
    panel: RangeChartPanel,
    actions: ChartActionHandler,
    close_requests: Rc<RefCell<Vec<String>>>,
    bounds: Rc<RefCell<Bounds<Pixels>>>,
    /// Pointer position relative to the panel's top-left corner.
    hover: Option<Point<Pixels>>,
    focus_handle: FocusHandle,
}

impl EventEmitter<RangeChartEvent> for RangeChartView {}

impl Focusable for RangeChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl RangeChartView {
    pub fn new(
        name: impl Into<String>,
        viewport: ViewportSize,
        instruments: &[InstrumentRange],
        notes: Arc<dyn NoteLookup>,
        config: ChartConfig,
        cx: &mut Context<Self>,
    ) -> Self {
        let close_requests = Rc::new(RefCell::new(Vec::new()));
        let queue = close_requests.clone();
        let panel = RangeChartPanel::new(viewport, instruments, notes, config, Instant::now())
            .with_name(name)
            .with_close_handler(move |name| queue.borrow_mut().push(name.to_string()));

        Self {
            panel,
            actions: ChartActionHandler::new(cx.weak_entity()),
            close_requests,
            bounds: Rc::new(RefCell::new(Bounds::default())),
            hover: None,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn panel(&self) -> &RangeChartPanel {
        &self.panel
    }

    /// Pushes a new grid cell size from the host.
    pub fn set_viewport(&mut self, size: ViewportSize, cx: &mut Context<Self>) {
        self.apply(LayoutEvent::ViewportChanged(size).into(), cx);
    }

    pub fn apply(&mut self, event: PanelEvent, cx: &mut Context<Self>) {
        let changed = self.panel.handle(event, Instant::now());
        let closed: Vec<String> = self.close_requests.borrow_mut().drain(..).collect();
        for name in closed {
            cx.emit(RangeChartEvent::Closed(name.into()));
        }
        if changed {
            cx.notify();
        }
    }

    fn hovered_tooltip(&self) -> Option<(Point<Pixels>, String)> {
        let pos = self.hover?;
        let margin = self.panel.chart().margin();
        let bar = self
            .panel
            .chart()
            .bar_at(pos.x.as_f32() - margin.left, pos.y.as_f32() - margin.top)?;
        Some((pos, bar.tooltip.clone()))
    }

    fn render_control_button(
        label: &'static str,
        enabled: bool,
        theme: &ChartTheme,
        on_click: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
    ) -> impl IntoElement {
        div()
            .size_6()
            .flex()
            .items_center()
            .justify_center()
            .rounded_sm()
            .text_size(px(12.0))
            .when(enabled, |d| {
                d.text_color(theme.axis_label)
                    .hover(|s| s.bg(theme.accent.opacity(0.4)))
                    .cursor_pointer()
                    .on_mouse_down(MouseButton::Left, on_click)
            })
            .when(!enabled, |d| d.text_color(theme.axis_label.opacity(0.2)))
            .child(label)
    }

    fn render_size_controls(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = *self.panel.layout();
        let config = *layout.config();
        let theme = self.panel.chart().theme().clone();

        div()
            .absolute()
            .top_1()
            .right_1()
            .flex()
            .gap_1()
            .p_1()
            .rounded_md()
            .bg(gpui::black().alpha(0.4))
            .when(config.can_resize_rows, |d| {
                d.child(Self::render_control_button(
                    "↓",
                    layout.can_increase_rows(),
                    &theme,
                    cx.listener(|this, _, _, cx| this.apply(LayoutEvent::IncreaseRows.into(), cx)),
                ))
                .child(Self::render_control_button(
                    "↑",
                    layout.can_decrease_rows(),
                    &theme,
                    cx.listener(|this, _, _, cx| this.apply(LayoutEvent::DecreaseRows.into(), cx)),
                ))
            })
            .when(config.can_resize_columns, |d| {
                d.child(Self::render_control_button(
                    "→",
                    layout.can_increase_columns(),
                    &theme,
                    cx.listener(|this, _, _, cx| {
                        this.apply(LayoutEvent::IncreaseColumns.into(), cx)
                    }),
                ))
                .child(Self::render_control_button(
                    "←",
                    layout.can_decrease_columns(),
                    &theme,
                    cx.listener(|this, _, _, cx| {
                        this.apply(LayoutEvent::DecreaseColumns.into(), cx)
                    }),
                ))
            })
            .child(Self::render_control_button(
                "✕",
                true,
                &theme,
                cx.listener(|this, _, _, cx| this.apply(PanelEvent::Close, cx)),
            ))
    }

    fn render_tooltip(&self) -> Option<AnyElement> {
        let (pos, text) = self.hovered_tooltip()?;
        let theme = self.panel.chart().theme();
        Some(
            div()
                .absolute()
                .left(pos.x + px(12.0))
                .top(pos.y + px(12.0))
                .px_2()
                .py_1()
                .rounded_sm()
                .bg(theme.tooltip_background)
                .text_color(theme.tooltip_text)
                .text_size(px(12.0))
                .child(text)
                .into_any_element(),
        )
    }
}

impl Render for RangeChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        let chart = self.panel.chart();
        let commands = chart.frame(now);
        if chart.is_animating(now) {
            window.request_animation_frame();
        }

        let layout = *self.panel.layout();
        let background = chart.theme().background;
        let bounds_rc = self.bounds.clone();
        let actions = self.actions.clone();

        div()
            .id(("range-chart-view", cx.entity_id()))
            .track_focus(&self.focus_handle)
            .relative()
            .w(px(layout.view_width().max(0.0)))
            .h(px(layout.view_height().max(0.0)))
            .bg(background)
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _win, cx| {
                let origin = this.bounds.borrow().origin;
                this.hover = Some(event.position - origin);
                cx.notify();
            }))
            .on_hover(cx.listener(|this, hovered: &bool, _win, cx| {
                if !*hovered {
                    this.hover = None;
                    cx.notify();
                }
            }))
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_increase_rows(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_decrease_rows(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_increase_columns(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_decrease_columns(a, w, c)
            })
            .on_action(move |a, w, c| actions.handle_close(a, w, c))
            .child(
                canvas(
                    move |bounds, _, _| {
                        *bounds_rc.borrow_mut() = bounds;
                    },
                    move |bounds, (), window, cx| {
                        paint_commands(&commands, bounds.origin, window, cx);
                    },
                )
                .absolute()
                .size_full(),
            )
            .child(self.render_size_controls(cx))
            .children(self.render_tooltip())
    }
}
