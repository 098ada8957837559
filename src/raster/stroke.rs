use egui::{Pos2, Rect};

use crate::color::Color;
use crate::geometry::{distance_to_segment, pixel_center};
use crate::pixel_buffer::PixelBuffer;

use super::pixel_span;

/// Paints a capsule of diameter `width` around the segment `from..to`.
/// Consecutive segments sharing an endpoint join seamlessly since every
/// segment carries round caps.
pub fn draw_stroke_segment(
    buffer: &mut PixelBuffer,
    from: Pos2,
    to: Pos2,
    width: f32,
    color: Color,
) -> usize {
    let radius = width / 2.0;
    let bounds = Rect::from_two_pos(from, to).expand(radius);
    let Some((xs, ys)) = pixel_span(buffer, &bounds) else {
        return 0;
    };

    let mut painted = 0;
    for y in ys {
        for x in xs.clone() {
            let center = pixel_center(x, y);
            if distance_to_segment(center, from, to) <= radius && buffer.plot(x, y, color) {
                painted += 1;
            }
        }
    }
    painted
}

/// A round dot of diameter `width`; what a stroke without movement leaves
pub fn draw_dot(buffer: &mut PixelBuffer, at: Pos2, width: f32, color: Color) -> usize {
    draw_stroke_segment(buffer, at, at, width, color)
}

/// A freehand stroke in progress.
///
/// Points are painted as they arrive; only the last one is needed to
/// continue the stroke, the rest are kept for the stroke's lifetime so
/// callers can inspect the path.
#[derive(Debug, Clone)]
pub struct StrokePath {
    points: Vec<Pos2>,
    color: Color,
    width: f32,
}

impl StrokePath {
    /// Starts a stroke and paints its first dot
    pub fn begin(buffer: &mut PixelBuffer, start: Pos2, width: f32, color: Color) -> Self {
        draw_dot(buffer, start, width, color);
        Self {
            points: vec![start],
            color,
            width,
        }
    }

    /// Extends the stroke to `point`, painting the connecting segment
    pub fn extend_to(&mut self, buffer: &mut PixelBuffer, point: Pos2) {
        if let Some(&last) = self.points.last() {
            draw_stroke_segment(buffer, last, point, self.width, self.color);
        }
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}
