//! Axis-aligned collision tests
//!
//! One overlap predicate serves both the paddle and brick checks, plus the
//! speed-tolerant edge test that picks which velocity axis a brick hit flips.

use super::state::Rect;

/// AABB overlap with strict inequalities: rectangles that only touch edges do
/// not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Which velocity axis a brick collision flips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Top or bottom face hit: negate dy
    Vertical,
    /// Side face hit: negate dx
    Horizontal,
}

/// Decide the bounce axis for a ball overlapping a brick.
///
/// The ball can be up to `speed` inside the brick by the time the overlap is
/// detected, so both edge comparisons back the overlap depth out to recover
/// which face was crossed. Exactly one axis flips per collision.
pub fn brick_bounce_axis(ball: &Rect, speed: f32, brick: &Rect) -> BounceAxis {
    if ball.bottom() - speed <= brick.top() || ball.top() >= brick.bottom() - speed {
        BounceAxis::Vertical
    } else {
        BounceAxis::Horizontal
    }
}
