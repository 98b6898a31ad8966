use crate::model::HOLES_PER_ROUND;

/// Course handicap used for allocation: the handicap index rounded to the nearest
/// stroke. Non-finite input counts as scratch.
#[must_use]
pub fn course_handicap(handicap_index: f64) -> i32 {
    if handicap_index.is_finite() {
        handicap_index.round() as i32
    } else {
        0
    }
}

/// Strokes received on a hole of stroke rank `rank` (1 hardest, 18 easiest).
///
/// Positive handicaps get `h / 18` on every hole plus one more on the `h % 18`
/// hardest holes. Plus handicaps give strokes back from the easiest holes the same
/// way. A missing or out-of-range rank receives nothing.
#[must_use]
pub fn strokes_received(course_handicap: i32, rank: Option<u8>) -> i32 {
    let Some(rank) = rank.filter(|r| (1..=HOLES_PER_ROUND).contains(r)) else {
        return 0;
    };
    let holes = u32::from(HOLES_PER_ROUND);
    let rank = u32::from(rank);
    let magnitude = course_handicap.unsigned_abs();
    let spread = magnitude / holes;
    let extra = magnitude % holes;

    // spread is at most 2^31 / 18, so it always fits back into an i32
    let spread = spread as i32;
    if course_handicap >= 0 {
        spread + i32::from(rank <= extra)
    } else {
        -(spread + i32::from(rank > holes - extra))
    }
}

/// Strokes received for a player's handicap index on a hole.
#[must_use]
pub fn strokes_for_index(handicap_index: f64, rank: Option<u8>) -> i32 {
    strokes_received(course_handicap(handicap_index), rank)
}
