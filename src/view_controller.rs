/// ViewController holds the layout arithmetic (span stepping, pixel extents, spacing)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Clamps a span into `[1, limit]`. A limit of zero is treated as one.
    pub fn clamp_span(span: u32, limit: u32) -> u32 {
        span.clamp(1, limit.max(1))
    }

    /// Moves a span one step up or down, saturating at `[1, limit]`.
    /// Returns `None` when the span is already at the boundary.
    pub fn step_span(span: u32, increase: bool, limit: u32) -> Option<u32> {
        let limit = limit.max(1);
        if increase {
            if span >= limit {
                return None;
            }
            Some(span + 1)
        } else {
            if span <= 1 {
                return None;
            }
            Some(span - 1)
        }
    }

    /// Total pixels covered by `span` grid cells of size `outer`.
    pub fn view_extent(outer: f32, span: u32) -> f32 {
        outer * span as f32
    }

    /// Pixels left for drawing once both insets are removed.
    pub fn inner_extent(view: f32, lead_inset: f32, trail_inset: f32) -> f32 {
        view - lead_inset - trail_inset
    }

    /// Start positions of `count` equal slots laid out from `start` across `total` pixels.
    pub fn evenly_spaced(start: f32, total: f32, count: usize) -> Vec<f32> {
        if count == 0 {
            return Vec::new();
        }
        let step = total / count as f32;
        (0..count).map(|i| start + step * i as f32).collect()
    }
}
