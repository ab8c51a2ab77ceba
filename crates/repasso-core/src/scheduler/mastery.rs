//! Mastery level - derived 0-100 summary of long-run performance
//!
//! Two independent signals gate full mastery: the accuracy ratio and
//! recent-streak confirmation. A lucky streak cannot mask long-run
//! weakness and a strong history cannot mask an unconfirmed lapse.

/// Mastery is capped below this value until three consecutive passes
const STREAK_GATE: u8 = 80;

/// Mastery cap while a lapse is still unconfirmed by two passes
const ACTIVE_LAPSE_CAP: u8 = 60;

/// Compute the mastery level from the correctness counters
///
/// Base is the accuracy percentage; an item cannot reach the streak gate
/// without `consecutive_correct >= 3`, and an active lapse (a lapse with
/// fewer than two passes since) caps the result at 60.
pub fn mastery_level(
    correct_count: u32,
    incorrect_count: u32,
    consecutive_correct: u32,
    lapse_count: u32,
) -> u8 {
    let attempts = correct_count + incorrect_count;
    let base = if attempts == 0 {
        0.0
    } else {
        100.0 * f64::from(correct_count) / f64::from(attempts)
    };
    let mut level = base.round().clamp(0.0, 100.0) as u8;

    if consecutive_correct < 3 {
        level = level.min(STREAK_GATE - 1);
    }
    if lapse_count > 0 && consecutive_correct < 2 {
        level = level.min(ACTIVE_LAPSE_CAP);
    }
    level
}
