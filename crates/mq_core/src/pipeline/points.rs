//! Match points from a finished game's two final scores.

use std::cmp::Ordering;

/// Points gained by each team for one game, in team order.
///
/// Strictly higher score takes 1, the other side 0; a tie gives both 0.5.
/// The two values always sum to exactly 1.
pub fn pts_gain(score_a: u32, score_b: u32) -> (f64, f64) {
    match score_a.cmp(&score_b) {
        Ordering::Greater => (1.0, 0.0),
        Ordering::Equal => (0.5, 0.5),
        Ordering::Less => (0.0, 1.0),
    }
}
