//! Recursive branching tree generator.
//!
//! Each branch draws half its remaining size, then fans out into 7 children
//! spread 45 degrees either side of its own heading. The traversal uses an
//! explicit work stack, so deep orders cannot exhaust the call stack; output
//! order is still preorder (parent before descendants, children left to
//! right).

use crate::error::FractalError;
use crate::geometry::{ColorTag, Point, Segment};

const CHILD_COUNT: u32 = 7;
const CHILD_FAN_DEGREES: f64 = 45.0;
const CHILD_STEP_DEGREES: f64 = 15.0;

struct BranchFrame {
    start: Point,
    angle_degrees: f64,
    size: f64,
    depth: u32,
}

/// Generates a branching tree of the given `order` inside the square bounding
/// box with top-left corner `top_left` and side length `size`. The trunk
/// starts at the bottom center of the box, heading straight up.
///
/// Segments at the deepest level are tagged `Leaf`, all others `Branch`.
pub fn generate_tree(top_left: Point, size: f64, order: u32) -> Result<Vec<Segment>, FractalError> {
    if order < 1 {
        return Err(FractalError::InvalidOrder(order));
    }
    if !(size > 0.0) {
        return Err(FractalError::InvalidSize(size));
    }

    let trunk_start = Point::new(top_left.x + size / 2.0, top_left.y + size);
    let total = ((CHILD_COUNT as usize).pow(order) - 1) / (CHILD_COUNT as usize - 1);
    let mut segments = Vec::with_capacity(total);

    let mut stack = vec![BranchFrame {
        start: trunk_start,
        angle_degrees: 90.0,
        size,
        depth: 1,
    }];

    while let Some(frame) = stack.pop() {
        let end = frame.start.polar_offset(frame.size / 2.0, frame.angle_degrees);
        let tag = if frame.depth == order {
            ColorTag::Leaf
        } else {
            ColorTag::Branch
        };
        segments.push(Segment::new(frame.start, end, tag));

        if frame.depth < order {
            // Push children in reverse so the widest-left heading pops first.
            for i in (0..CHILD_COUNT).rev() {
                let angle = frame.angle_degrees + CHILD_FAN_DEGREES - CHILD_STEP_DEGREES * i as f64;
                stack.push(BranchFrame {
                    start: end,
                    angle_degrees: angle,
                    size: frame.size / 2.0,
                    depth: frame.depth + 1,
                });
            }
        }
    }

    Ok(segments)
}
