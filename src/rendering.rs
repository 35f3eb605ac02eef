// Painting of chart draw commands into a GPUI window

use crate::data_types::{DrawCommand, TextAnchor};
use crate::utils::{to_pixel_bounds, to_pixel_point};
use gpui::*;

/// Paints commands in order, with panel coordinates offset by `origin`.
pub fn paint_commands(
    commands: &[DrawCommand],
    origin: Point<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    for command in commands {
        paint_command(command, origin, window, cx);
    }
}

fn paint_command(command: &DrawCommand, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    match command {
        DrawCommand::Group { children, .. } => paint_commands(children, origin, window, cx),
        DrawCommand::Rect { bounds, fill, .. } => {
            if bounds.size.width <= 0.0 || bounds.size.height <= 0.0 {
                return;
            }
            if let Some(color) = fill {
                window.paint_quad(gpui::fill(to_pixel_bounds(bounds, origin), *color));
            }
        }
        DrawCommand::Line {
            from,
            to,
            color,
            width,
        } => {
            let mut builder = PathBuilder::stroke(px(*width));
            builder.move_to(to_pixel_point(from, origin));
            builder.line_to(to_pixel_point(to, origin));
            if let Ok(path) = builder.build() {
                window.paint_path(path, *color);
            }
        }
        DrawCommand::Text {
            text,
            origin: anchor_point,
            anchor,
            color,
            size,
        } => {
            if text.is_empty() {
                return;
            }
            paint_text(text, *anchor_point, *anchor, *color, px(*size), origin, window, cx);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn paint_text(
    text: &str,
    anchor_point: Point<f32>,
    anchor: TextAnchor,
    color: Hsla,
    font_size: Pixels,
    origin: Point<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let run = TextRun {
        len: text.len(),
        font: window.text_style().font(),
        color,
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let line = window
        .text_system()
        .shape_line(SharedString::from(text.to_string()), font_size, &[run], None);

    let line_width = line.width;
    let x_offset = match anchor {
        TextAnchor::Start => px(0.0),
        TextAnchor::Middle => line_width / 2.0,
        TextAnchor::End => line_width,
    };
    let line_height = font_size * 1.3;
    let top_left = to_pixel_point(&anchor_point, origin) - point(x_offset, line_height / 2.0);
    let _ = line.paint(top_left, line_height, window, cx);
}
