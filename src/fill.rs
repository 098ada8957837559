use std::collections::VecDeque;

use crate::color::Color;
use crate::error::CanvasResult;
use crate::pixel_buffer::PixelBuffer;

const NEIGHBOURS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Replaces the 4-connected region of the start pixel's color with
/// `fill_color` (alpha forced opaque). Matching is exact RGBA equality.
///
/// Returns the number of pixels changed; filling a region that already has
/// the fill color changes nothing.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    start_x: i32,
    start_y: i32,
    fill_color: Color,
) -> CanvasResult<usize> {
    let target = buffer.get_pixel(start_x, start_y)?;
    let fill_color = fill_color.opaque();
    if target == fill_color {
        log::debug!("Fill at ({}, {}) is a no-op, region already {}", start_x, start_y, fill_color);
        return Ok(0);
    }

    let width = buffer.width() as usize;
    let mut visited = vec![false; width * buffer.height() as usize];
    let mut queue = VecDeque::with_capacity(1024);

    visited[start_y as usize * width + start_x as usize] = true;
    queue.push_back((start_x, start_y));

    let mut filled = 0;
    while let Some((x, y)) = queue.pop_front() {
        buffer.set_pixel(x, y, fill_color)?;
        filled += 1;

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if !buffer.contains(nx, ny) {
                continue;
            }
            let idx = ny as usize * width + nx as usize;
            if visited[idx] {
                continue;
            }
            // Only pixels not yet filled can still match the target color
            if buffer.get_pixel(nx, ny)? == target {
                visited[idx] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    log::debug!("Filled {} pixels from ({}, {})", filled, start_x, start_y);
    Ok(filled)
}
