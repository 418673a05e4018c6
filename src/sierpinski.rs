//! Sierpinski triangle generator.
//!
//! Recursive subdivision of an equilateral triangle (flat side on top, apex
//! pointing down) into three half-size copies. Output is the flat list of
//! line segments in traversal order, so repeated runs are reproducible.

use crate::error::FractalError;
use crate::geometry::{ColorTag, Point, Segment};

/// Generates the segments of a Sierpinski triangle of the given `order` with
/// its top-left corner at `top_left` and side length `size`.
///
/// Order 1 is a single triangle (3 segments); each extra order triples the
/// segment count.
pub fn generate_sierpinski(
    top_left: Point,
    size: f64,
    order: u32,
) -> Result<Vec<Segment>, FractalError> {
    if order < 1 {
        return Err(FractalError::InvalidOrder(order));
    }
    if !(size > 0.0) {
        return Err(FractalError::InvalidSize(size));
    }
    let mut segments = Vec::with_capacity(3usize.pow(order));
    subdivide(top_left, size, order, &mut segments);
    Ok(segments)
}

fn subdivide(top_left: Point, size: f64, order: u32, segments: &mut Vec<Segment>) {
    if order == 1 {
        emit_triangle(top_left, size, segments);
    } else {
        let half = size / 2.0;
        let top_right = Point::new(top_left.x + half, top_left.y);
        let bottom = Point::new(
            top_left.x + size / 4.0,
            top_left.y + size / 4.0 * 3.0f64.sqrt(),
        );
        subdivide(top_left, half, order - 1, segments);
        subdivide(top_right, half, order - 1, segments);
        subdivide(bottom, half, order - 1, segments);
    }
}

/// Emits one equilateral triangle: top-left vertex, top-right vertex, and the
/// apex below the midpoint of the top edge.
fn emit_triangle(top_left: Point, size: f64, segments: &mut Vec<Segment>) {
    let top_right = Point::new(top_left.x + size, top_left.y);
    let apex = Point::new(
        top_left.x + size / 2.0,
        top_left.y + size / 2.0 * 3.0f64.sqrt(),
    );
    segments.push(Segment::new(top_left, apex, ColorTag::Plain));
    segments.push(Segment::new(top_left, top_right, ColorTag::Plain));
    segments.push(Segment::new(top_right, apex, ColorTag::Plain));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_order_one_is_single_triangle() {
        let segments = generate_sierpinski(Point::new(0.0, 0.0), 100.0, 1).unwrap();
        assert_eq!(segments.len(), 3);

        // The three implied vertices are pairwise equidistant.
        let a = segments[0].from;
        let b = segments[1].to;
        let c = segments[0].to;
        let ab = a.distance_to(&b);
        let bc = b.distance_to(&c);
        let ca = c.distance_to(&a);
        assert_relative_eq!(ab, 100.0, epsilon = 1e-9);
        assert_relative_eq!(ab, bc, epsilon = 1e-9);
        assert_relative_eq!(bc, ca, epsilon = 1e-9);
    }

    #[test]
    fn test_segment_count_grows_geometrically() {
        for order in 1..=6 {
            let segments = generate_sierpinski(Point::new(5.0, 5.0), 64.0, order).unwrap();
            assert_eq!(segments.len(), 3usize.pow(order));
        }
    }

    #[test]
    fn test_all_segments_are_plain() {
        let segments = generate_sierpinski(Point::new(0.0, 0.0), 32.0, 3).unwrap();
        assert!(segments.iter().all(|s| s.tag == ColorTag::Plain));
    }

    #[test]
    fn test_subdivision_order_is_deterministic() {
        // The first 3^(order-1) segments of an order-n triangle are exactly
        // the top-left half-size triangle at order n-1.
        let whole = generate_sierpinski(Point::new(0.0, 0.0), 100.0, 3).unwrap();
        let top_left = generate_sierpinski(Point::new(0.0, 0.0), 50.0, 2).unwrap();
        assert_eq!(&whole[..top_left.len()], &top_left[..]);

        let top_right = generate_sierpinski(Point::new(50.0, 0.0), 50.0, 2).unwrap();
        assert_eq!(&whole[top_left.len()..2 * top_left.len()], &top_right[..]);
    }

    #[test]
    fn test_apex_below_top_edge() {
        let segments = generate_sierpinski(Point::new(10.0, 20.0), 80.0, 1).unwrap();
        let apex = segments[0].to;
        assert_relative_eq!(apex.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(apex.y, 20.0 + 40.0 * 3.0f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_arguments_rejected() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(
            generate_sierpinski(p, 100.0, 0),
            Err(FractalError::InvalidOrder(0))
        );
        assert_eq!(
            generate_sierpinski(p, 0.0, 2),
            Err(FractalError::InvalidSize(0.0))
        );
        assert_eq!(
            generate_sierpinski(p, -4.0, 2),
            Err(FractalError::InvalidSize(-4.0))
        );
        assert!(generate_sierpinski(p, f64::NAN, 2).is_err());
    }
}
