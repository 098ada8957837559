use egui::Pos2;

/// Distance from `point` to the segment `start..end`.
/// A zero-length segment degenerates to the distance to `start`.
pub fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let to_point = point - start;

    let length_sq = line.length_sq();
    if length_sq == 0.0 {
        return to_point.length();
    }

    let t = (to_point.dot(line) / length_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}

/// Even-odd test of `point` against the closed polygon `vertices`
pub fn polygon_contains(vertices: &[Pos2], point: Pos2) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
