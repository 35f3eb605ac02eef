use gpui::{Bounds, Pixels, Point, px, size};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Converts a panel-space rectangle into window pixels relative to `origin`.
pub fn to_pixel_bounds(bounds: &Bounds<f32>, origin: Point<Pixels>) -> Bounds<Pixels> {
    Bounds::new(
        origin + Point::new(px(bounds.origin.x), px(bounds.origin.y)),
        size(px(bounds.size.width), px(bounds.size.height)),
    )
}

pub fn to_pixel_point(point: &Point<f32>, origin: Point<Pixels>) -> Point<Pixels> {
    origin + Point::new(px(point.x), px(point.y))
}
