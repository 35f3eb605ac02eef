//! Declarative drawing primitives produced by the chart and consumed by a renderer.
//!
//! All coordinates are in panel pixels with the origin at the panel's top-left
//! corner. Commands are painted in order, so later commands cover earlier ones.

use gpui::{Bounds, Hsla, Point};

/// Horizontal alignment of a text label relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Named collection of commands, e.g. one axis.
    Group {
        name: &'static str,
        children: Vec<DrawCommand>,
    },
    Rect {
        bounds: Bounds<f32>,
        /// `None` leaves the rectangle unfilled.
        fill: Option<Hsla>,
        tooltip: Option<String>,
    },
    Line {
        from: Point<f32>,
        to: Point<f32>,
        color: Hsla,
        width: f32,
    },
    /// `origin.y` is the vertical centre of the text line, not its baseline.
    Text {
        text: String,
        origin: Point<f32>,
        anchor: TextAnchor,
        color: Hsla,
        size: f32,
    },
}

impl DrawCommand {
    pub fn group(name: &'static str, children: Vec<DrawCommand>) -> Self {
        Self::Group { name, children }
    }

    /// Shifts the command (and any children) by the given offset.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        let shift = |p: Point<f32>| Point::new(p.x + dx, p.y + dy);
        match self {
            Self::Group { name, children } => Self::Group {
                name,
                children: children.into_iter().map(|c| c.translate(dx, dy)).collect(),
            },
            Self::Rect {
                bounds,
                fill,
                tooltip,
            } => Self::Rect {
                bounds: Bounds::new(shift(bounds.origin), bounds.size),
                fill,
                tooltip,
            },
            Self::Line {
                from,
                to,
                color,
                width,
            } => Self::Line {
                from: shift(from),
                to: shift(to),
                color,
                width,
            },
            Self::Text {
                text,
                origin,
                anchor,
                color,
                size,
            } => Self::Text {
                text,
                origin: shift(origin),
                anchor,
                color,
                size,
            },
        }
    }

    /// Finds the first group with the given name, searching depth-first.
    pub fn find_group<'a>(commands: &'a [DrawCommand], name: &str) -> Option<&'a [DrawCommand]> {
        for command in commands {
            if let Self::Group {
                name: group_name,
                children,
            } = command
            {
                if *group_name == name {
                    return Some(children);
                }
                if let Some(found) = Self::find_group(children, name) {
                    return Some(found);
                }
            }
        }
        None
    }
}
