//! Score awards. Scores only ever grow; nothing here subtracts.

/// Awarded for every card placed on a foundation.
pub const FOUNDATION_BONUS: u32 = 10;
/// Awarded when a face-down tableau card is turned up.
pub const REVEAL_BONUS: u32 = 5;

/// Bonus for finishing quickly, by elapsed whole seconds.
pub fn time_bonus(elapsed_secs: u64) -> u32 {
    match elapsed_secs {
        0..=119 => 500,
        120..=299 => 300,
        300..=599 => 100,
        _ => 50,
    }
}

/// Bonus for finishing in few moves.
pub fn move_bonus(moves: u32) -> u32 {
    match moves {
        0..=149 => 200,
        150..=199 => 100,
        200..=299 => 50,
        _ => 0,
    }
}

/// One-time award applied when the last card reaches a foundation.
///
/// ```
/// use klondike_engine::scoring::completion_bonus;
///
/// assert_eq!(completion_bonus(90, 120), 700);
/// assert_eq!(completion_bonus(900, 400), 50);
/// ```
pub fn completion_bonus(elapsed_secs: u64, moves: u32) -> u32 {
    time_bonus(elapsed_secs) + move_bonus(moves)
}
