//! Canvas-space geometry on top of egui's `Pos2`/`Rect`.
//!
//! Pixel `(x, y)` covers the unit square `x..x+1, y..y+1`, so its centre is
//! `(x + 0.5, y + 0.5)`.

mod hit_testing;

pub use hit_testing::{distance_to_segment, polygon_contains};

use egui::{Pos2, Rect, pos2};

/// Centre of the pixel at integer coordinates
pub fn pixel_center(x: i32, y: i32) -> Pos2 {
    pos2(x as f32 + 0.5, y as f32 + 0.5)
}

/// Rect covering the pixels from `(x0, y0)` to `(x1, y1)` inclusive, in
/// any drag direction
pub fn pixel_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::from_min_max(
        pos2(x0.min(x1) as f32, y0.min(y1) as f32),
        pos2(x0.max(x1) as f32 + 1.0, y0.max(y1) as f32 + 1.0),
    )
}
