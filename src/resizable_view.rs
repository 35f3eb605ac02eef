//! Resizable Panel Layout
//!
//! A panel occupies `row_span x column_span` cells of a layout grid whose cell size
//! is supplied by the host (`ViewportSize`). `LayoutState` is a plain value: every
//! pixel dimension is derived on demand from the viewport, spans and margin, and
//! changes go through the pure `LayoutState::apply` transition.
//!
//! `ResizableView` wraps the state with the hooks an owner registers to be told
//! about redraws and close requests.

use crate::data_types::{Margin, ResizeConfig, ViewportSize};
use crate::view_controller::ViewController;
use std::fmt;

/// Input to the layout state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutEvent {
    ViewportChanged(ViewportSize),
    IncreaseRows,
    DecreaseRows,
    IncreaseColumns,
    DecreaseColumns,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    viewport: ViewportSize,
    margin: Margin,
    row_span: u32,
    column_span: u32,
    config: ResizeConfig,
}

impl LayoutState {
    /// Initial spans are taken from `config` and clamped into their limits.
    pub fn new(viewport: ViewportSize, margin: Margin, config: ResizeConfig) -> Self {
        Self {
            viewport,
            margin,
            row_span: ViewController::clamp_span(config.row_span, config.row_limit),
            column_span: ViewController::clamp_span(config.column_span, config.column_limit),
            config,
        }
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn row_span(&self) -> u32 {
        self.row_span
    }

    pub fn column_span(&self) -> u32 {
        self.column_span
    }

    pub fn view_width(&self) -> f32 {
        ViewController::view_extent(self.viewport.outer_width, self.column_span)
    }

    pub fn view_height(&self) -> f32 {
        ViewController::view_extent(self.viewport.outer_height, self.row_span)
    }

    /// Width of the drawable area.
    pub fn width(&self) -> f32 {
        ViewController::inner_extent(self.view_width(), self.margin.left, self.margin.right)
    }

    /// Height of the drawable area.
    pub fn height(&self) -> f32 {
        ViewController::inner_extent(self.view_height(), self.margin.top, self.margin.bottom)
    }

    pub fn can_increase_rows(&self) -> bool {
        self.config.can_resize_rows
            && ViewController::step_span(self.row_span, true, self.config.row_limit).is_some()
    }

    pub fn can_decrease_rows(&self) -> bool {
        self.config.can_resize_rows
            && ViewController::step_span(self.row_span, false, self.config.row_limit).is_some()
    }

    pub fn can_increase_columns(&self) -> bool {
        self.config.can_resize_columns
            && ViewController::step_span(self.column_span, true, self.config.column_limit)
                .is_some()
    }

    pub fn can_decrease_columns(&self) -> bool {
        self.config.can_resize_columns
            && ViewController::step_span(self.column_span, false, self.config.column_limit)
                .is_some()
    }

    /// Grid placement descriptor, e.g. `"span 2 / span 1"`.
    pub fn grid_area(&self) -> String {
        format!("span {} / span {}", self.row_span, self.column_span)
    }

    /// Applies an event and returns the new state, or `None` when the event
    /// leaves the layout unchanged.
    pub fn apply(&self, event: LayoutEvent) -> Option<LayoutState> {
        let mut next = *self;
        match event {
            LayoutEvent::ViewportChanged(size) => {
                if self.viewport.same_dimensions(&size) {
                    return None;
                }
                next.viewport = size;
            }
            LayoutEvent::IncreaseRows | LayoutEvent::DecreaseRows => {
                if !self.config.can_resize_rows {
                    return None;
                }
                let increase = event == LayoutEvent::IncreaseRows;
                next.row_span =
                    ViewController::step_span(self.row_span, increase, self.config.row_limit)?;
            }
            LayoutEvent::IncreaseColumns | LayoutEvent::DecreaseColumns => {
                if !self.config.can_resize_columns {
                    return None;
                }
                let increase = event == LayoutEvent::IncreaseColumns;
                next.column_span = ViewController::step_span(
                    self.column_span,
                    increase,
                    self.config.column_limit,
                )?;
            }
        }
        Some(next)
    }
}

pub type RedrawHook = Box<dyn FnMut(&LayoutState)>;
pub type CloseHandler = Box<dyn FnMut(&str)>;

pub struct ResizableView {
    state: LayoutState,
    name: Option<String>,
    on_redraw: Option<RedrawHook>,
    on_close: Option<CloseHandler>,
}

impl fmt::Debug for ResizableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizableView")
            .field("state", &self.state)
            .field("name", &self.name)
            .field("has_redraw_hook", &self.on_redraw.is_some())
            .field("has_close_handler", &self.on_close.is_some())
            .finish()
    }
}

impl ResizableView {
    pub fn new(viewport: ViewportSize, margin: Margin, config: ResizeConfig) -> Self {
        Self {
            state: LayoutState::new(viewport, margin, config),
            name: None,
            on_redraw: None,
            on_close: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Registers the hook invoked after every layout change.
    pub fn with_redraw_hook(mut self, hook: impl FnMut(&LayoutState) + 'static) -> Self {
        self.on_redraw = Some(Box::new(hook));
        self
    }

    /// Registers the container callback that receives this view's name on close.
    pub fn with_close_handler(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Runs the layout transition; on change stores the new state, calls the
    /// redraw hook and returns `true`.
    pub fn dispatch(&mut self, event: LayoutEvent) -> bool {
        let Some(next) = self.state.apply(event) else {
            tracing::trace!(?event, "layout unchanged");
            return false;
        };
        self.state = next;
        tracing::debug!(
            ?event,
            width = next.width(),
            height = next.height(),
            row_span = next.row_span(),
            column_span = next.column_span(),
            "layout changed"
        );
        if let Some(hook) = self.on_redraw.as_mut() {
            hook(&self.state);
        }
        true
    }

    pub fn on_viewport_change(&mut self, size: ViewportSize) -> bool {
        self.dispatch(LayoutEvent::ViewportChanged(size))
    }

    pub fn increase_row_span(&mut self) -> bool {
        self.dispatch(LayoutEvent::IncreaseRows)
    }

    pub fn decrease_row_span(&mut self) -> bool {
        self.dispatch(LayoutEvent::DecreaseRows)
    }

    pub fn increase_column_span(&mut self) -> bool {
        self.dispatch(LayoutEvent::IncreaseColumns)
    }

    pub fn decrease_column_span(&mut self) -> bool {
        self.dispatch(LayoutEvent::DecreaseColumns)
    }

    /// Asks the owning container to remove this view. Only signals when both a
    /// close handler and a name are configured; returns whether it did.
    pub fn close(&mut self) -> bool {
        match (self.on_close.as_mut(), self.name.as_deref()) {
            (Some(handler), Some(name)) => {
                tracing::debug!(view = name, "close requested");
                handler(name);
                true
            }
            _ => false,
        }
    }
}
