//! Polyline simplification via Ramer-Douglas-Peucker.

use kurbo::Point;

/// Reduce a dense point chain to a small vertex set, keeping every original
/// point within `tolerance` perpendicular distance of the simplified
/// polyline.
///
/// Classic RDP: find the interior point farthest from the first-last chord;
/// above tolerance, split there and simplify both halves, otherwise collapse
/// the chain to its endpoints. The recursion is run as an explicit stack of
/// index ranges with a keep-mask, so stack depth is independent of chain
/// length; the output is identical to the recursive form. Chains of fewer
/// than 3 points are returned unchanged.
pub fn simplify_polygon(points: &[Point], tolerance: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut ranges = vec![(0usize, n - 1)];
    while let Some((first, last)) = ranges.pop() {
        if last <= first + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut index = first;
        for i in (first + 1)..last {
            let d = perpendicular_distance(points[i], points[first], points[last]);
            if d > max_dist {
                max_dist = d;
                index = i;
            }
        }

        if max_dist > tolerance {
            keep[index] = true;
            ranges.push((first, index));
            ranges.push((index, last));
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter(|(_, &kept)| kept)
        .map(|(p, _)| *p)
        .collect()
}

/// Distance from `p` to the line through `a` and `b`: twice the triangle
/// area over the base length. A zero-length base falls back to the
/// point-to-point distance.
fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let base = a.distance(b);
    if base == 0.0 {
        return p.distance(a);
    }
    let twice_area = ((b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)).abs();
    twice_area / base
}
