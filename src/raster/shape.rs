use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CanvasError;
use crate::geometry::{distance_to_segment, pixel_center, polygon_contains};
use crate::pixel_buffer::PixelBuffer;

use super::pixel_span;

const STAR_SPIKES: usize = 5;
const STAR_INNER_RATIO: f32 = 0.5;
/// How far the crescent's cutting disk is shifted, as a fraction of the radius
const CRESCENT_OFFSET_RATIO: f32 = 0.5;

/// The shapes the shape tool can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    Crescent,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::Star,
        ShapeKind::Crescent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Star => "star",
            ShapeKind::Crescent => "crescent",
        }
    }

    /// Side count for the regular polygons
    pub fn sides(&self) -> Option<usize> {
        match self {
            ShapeKind::Pentagon => Some(5),
            ShapeKind::Hexagon => Some(6),
            ShapeKind::Octagon => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownShape(s.to_owned()))
    }
}

/// Whether a shape is painted solid or traced along its edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeStyle {
    Filled,
    Outlined { width: f32 },
}

/// Resolved geometry of a shape placed in a bounding box
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Closed polygon, last vertex connects back to the first
    Polygon(Vec<Pos2>),
    Disk { center: Pos2, radius: f32 },
    /// A disk with a second, offset disk cut out of it
    Crescent {
        center: Pos2,
        radius: f32,
        cut_center: Pos2,
        cut_radius: f32,
    },
}

impl Outline {
    /// Lays `kind` out inside `bounds`. Round and regular shapes use the
    /// shorter side of the box so they keep their proportions.
    pub fn new(kind: ShapeKind, bounds: &Rect) -> Self {
        let center = bounds.center();
        let radius = bounds.size().min_elem() / 2.0;

        match kind {
            ShapeKind::Rectangle => Outline::Polygon(vec![
                bounds.left_top(),
                bounds.right_top(),
                bounds.right_bottom(),
                bounds.left_bottom(),
            ]),
            ShapeKind::Circle => Outline::Disk { center, radius },
            ShapeKind::Triangle => Outline::Polygon(vec![
                bounds.center_top(),
                bounds.right_bottom(),
                bounds.left_bottom(),
            ]),
            ShapeKind::Pentagon | ShapeKind::Hexagon | ShapeKind::Octagon => {
                let sides = kind.sides().unwrap_or(5);
                Outline::Polygon(regular_polygon(center, radius, sides))
            }
            ShapeKind::Star => Outline::Polygon(star(center, radius, radius * STAR_INNER_RATIO)),
            ShapeKind::Crescent => Outline::Crescent {
                center,
                radius,
                cut_center: center + Vec2::X * radius * CRESCENT_OFFSET_RATIO,
                cut_radius: radius,
            },
        }
    }

    pub fn contains(&self, point: Pos2) -> bool {
        match self {
            Outline::Polygon(vertices) => polygon_contains(vertices, point),
            Outline::Disk { center, radius } => point.distance(*center) <= *radius,
            Outline::Crescent {
                center,
                radius,
                cut_center,
                cut_radius,
            } => point.distance(*center) <= *radius && point.distance(*cut_center) > *cut_radius,
        }
    }

    /// True when `point` lies within `half_width` of the shape's boundary
    pub fn is_near_edge(&self, point: Pos2, half_width: f32) -> bool {
        match self {
            Outline::Polygon(vertices) => {
                let n = vertices.len();
                (0..n).any(|i| {
                    distance_to_segment(point, vertices[i], vertices[(i + 1) % n]) <= half_width
                })
            }
            Outline::Disk { center, radius } => {
                (point.distance(*center) - radius).abs() <= half_width
            }
            Outline::Crescent {
                center,
                radius,
                cut_center,
                cut_radius,
            } => {
                let to_outer = point.distance(*center);
                let to_cut = point.distance(*cut_center);
                let on_outer_arc =
                    (to_outer - radius).abs() <= half_width && to_cut >= cut_radius - half_width;
                let on_inner_arc =
                    (to_cut - cut_radius).abs() <= half_width && to_outer <= radius + half_width;
                on_outer_arc || on_inner_arc
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Polygon(vertices) => Rect::from_points(vertices),
            Outline::Disk { center, radius } | Outline::Crescent { center, radius, .. } => {
                Rect::from_center_size(*center, Vec2::splat(radius * 2.0))
            }
        }
    }
}

/// Vertices of a regular polygon with one vertex pointing straight up
fn regular_polygon(center: Pos2, radius: f32, sides: usize) -> Vec<Pos2> {
    (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / sides as f32 - FRAC_PI_2;
            center + Vec2::angled(angle) * radius
        })
        .collect()
}

/// Star outline alternating outer and inner vertices, top spike first
fn star(center: Pos2, outer: f32, inner: f32) -> Vec<Pos2> {
    let step = PI / STAR_SPIKES as f32;
    (0..STAR_SPIKES * 2)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let angle = step * i as f32 - FRAC_PI_2;
            center + Vec2::angled(angle) * r
        })
        .collect()
}

/// Rasterizes `kind` inside `bounds`, returning the number of pixels written
pub fn draw_shape(
    buffer: &mut PixelBuffer,
    kind: ShapeKind,
    bounds: &Rect,
    style: ShapeStyle,
    color: Color,
) -> usize {
    let outline = Outline::new(kind, bounds);
    let padding = match style {
        ShapeStyle::Filled => 0.0,
        ShapeStyle::Outlined { width } => width / 2.0,
    };
    let Some((xs, ys)) = pixel_span(buffer, &outline.bounds().expand(padding)) else {
        return 0;
    };

    let mut painted = 0;
    for y in ys {
        for x in xs.clone() {
            let center = pixel_center(x, y);
            let covered = match style {
                ShapeStyle::Filled => outline.contains(center),
                ShapeStyle::Outlined { width } => outline.is_near_edge(center, width / 2.0),
            };
            if covered && buffer.plot(x, y, color) {
                painted += 1;
            }
        }
    }

    log::debug!("Rasterized {} ({:?}): {} pixels", kind, style, painted);
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> PixelBuffer {
        PixelBuffer::new(100, 100, Color::WHITE).unwrap()
    }

    fn stamp(x: f32, y: f32, size: f32) -> Rect {
        Rect::from_center_size(pos2(x, y), Vec2::splat(size))
    }

    fn is_black(buffer: &PixelBuffer, x: i32, y: i32) -> bool {
        buffer.get_pixel(x, y).unwrap() == Color::BLACK
    }

    #[test]
    fn test_parse_shape_names() {
        assert_eq!("rectangle".parse::<ShapeKind>().unwrap(), ShapeKind::Rectangle);
        assert_eq!("Octagon".parse::<ShapeKind>().unwrap(), ShapeKind::Octagon);
        assert!(matches!(
            "blob".parse::<ShapeKind>(),
            Err(CanvasError::UnknownShape(_))
        ));
        for kind in ShapeKind::ALL {
            assert_eq!(kind.name().parse::<ShapeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_filled_rectangle_is_exact() {
        let mut buffer = canvas();
        let bounds = stamp(50.0, 50.0, 40.0);
        let count = draw_shape(
            &mut buffer,
            ShapeKind::Rectangle,
            &bounds,
            ShapeStyle::Filled,
            Color::BLACK,
        );

        assert_eq!(count, 40 * 40);
        for y in 0..100 {
            for x in 0..100 {
                let inside = (30..70).contains(&x) && (30..70).contains(&y);
                assert_eq!(is_black(&buffer, x, y), inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_circle_uses_short_side() {
        let mut buffer = canvas();
        let bounds = Rect::from_two_pos(pos2(90.0, 40.0), pos2(10.0, 60.0));
        draw_shape(&mut buffer, ShapeKind::Circle, &bounds, ShapeStyle::Filled, Color::BLACK);

        assert!(is_black(&buffer, 50, 50));
        // Radius is 10, so the wide ends of the box stay untouched
        assert!(is_black(&buffer, 41, 50));
        assert!(!is_black(&buffer, 38, 50));
        assert!(!is_black(&buffer, 15, 50));
    }

    #[test]
    fn test_triangle_apex_at_top_center() {
        let mut buffer = canvas();
        let bounds = Rect::from_two_pos(pos2(20.0, 20.0), pos2(80.0, 80.0));
        draw_shape(&mut buffer, ShapeKind::Triangle, &bounds, ShapeStyle::Filled, Color::BLACK);

        assert!(is_black(&buffer, 50, 22));
        assert!(!is_black(&buffer, 25, 22));
        assert!(is_black(&buffer, 21, 79));
        assert!(is_black(&buffer, 78, 79));
    }

    #[test]
    fn test_regular_polygon_vertices() {
        let vertices = regular_polygon(Pos2::ZERO, 10.0, 6);
        assert_eq!(vertices.len(), 6);
        // First vertex points up
        assert!(vertices[0].x.abs() < 1e-4);
        assert!((vertices[0].y + 10.0).abs() < 1e-4);
        for v in &vertices {
            assert!((v.to_vec2().length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_star_alternates_radii() {
        let vertices = star(Pos2::ZERO, 10.0, 5.0);
        assert_eq!(vertices.len(), 10);
        for (i, v) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 10.0 } else { 5.0 };
            assert!((v.to_vec2().length() - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_star_leaves_gaps_between_spikes() {
        let mut buffer = canvas();
        let bounds = stamp(50.0, 50.0, 80.0);
        draw_shape(&mut buffer, ShapeKind::Star, &bounds, ShapeStyle::Filled, Color::BLACK);

        assert!(is_black(&buffer, 50, 50));
        // Top spike
        assert!(is_black(&buffer, 50, 14));
        // Between the top and upper-right spikes, beyond the inner radius
        let angle = -FRAC_PI_2 + PI / 5.0;
        let x = 50.0 + 35.0 * angle.cos();
        let y = 50.0 + 35.0 * angle.sin();
        assert!(!is_black(&buffer, x as i32, y as i32));
    }

    #[test]
    fn test_crescent_is_not_a_full_disk() {
        let mut buffer = canvas();
        let bounds = stamp(50.0, 50.0, 60.0);
        draw_shape(&mut buffer, ShapeKind::Crescent, &bounds, ShapeStyle::Filled, Color::BLACK);

        // Left rim is painted, the centre and right side are cut away
        assert!(is_black(&buffer, 25, 50));
        assert!(!is_black(&buffer, 50, 50));
        assert!(!is_black(&buffer, 75, 50));
    }

    #[test]
    fn test_outlined_rectangle_leaves_interior() {
        let mut buffer = canvas();
        let bounds = crate::geometry::pixel_rect(20, 20, 59, 59);
        draw_shape(
            &mut buffer,
            ShapeKind::Rectangle,
            &bounds,
            ShapeStyle::Outlined { width: 3.0 },
            Color::BLACK,
        );

        assert!(is_black(&buffer, 20, 40));
        assert!(is_black(&buffer, 40, 59));
        assert!(!is_black(&buffer, 40, 40));
        assert!(!is_black(&buffer, 10, 10));
    }

    #[test]
    fn test_outlined_circle_is_a_ring() {
        let mut buffer = canvas();
        let bounds = stamp(50.0, 50.0, 40.0);
        draw_shape(
            &mut buffer,
            ShapeKind::Circle,
            &bounds,
            ShapeStyle::Outlined { width: 3.0 },
            Color::BLACK,
        );

        assert!(is_black(&buffer, 70, 49));
        assert!(!is_black(&buffer, 50, 50));
        assert!(!is_black(&buffer, 75, 50));
    }

    #[test]
    fn test_shape_off_canvas_is_clipped() {
        let mut buffer = canvas();
        let bounds = stamp(0.0, 0.0, 40.0);
        let count = draw_shape(
            &mut buffer,
            ShapeKind::Rectangle,
            &bounds,
            ShapeStyle::Filled,
            Color::BLACK,
        );
        assert_eq!(count, 20 * 20);
    }
}
