//! Turns strokes and shapes into pixel writes on a [`PixelBuffer`].
//!
//! Coverage is decided by sampling pixel centres, with no anti-aliasing:
//! a pixel takes the paint color if its centre falls inside the geometry.
//! Anything hanging off the canvas is clipped.

mod shape;
mod stroke;

pub use shape::{Outline, ShapeKind, ShapeStyle, draw_shape};
pub use stroke::{StrokePath, draw_dot, draw_stroke_segment};

use std::ops::Range;

use egui::Rect;

use crate::pixel_buffer::PixelBuffer;

/// Integer pixel ranges covered by `bounds`, clipped to the buffer
fn pixel_span(buffer: &PixelBuffer, bounds: &Rect) -> Option<(Range<i32>, Range<i32>)> {
    let x0 = (bounds.min.x.floor() as i32).max(0);
    let y0 = (bounds.min.y.floor() as i32).max(0);
    let x1 = (bounds.max.x.ceil() as i32).min(buffer.width() as i32);
    let y1 = (bounds.max.y.ceil() as i32).min(buffer.height() as i32);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0..x1, y0..y1))
}
