use crate::shapes::AttackWeight;

/// Sentinel for a forced win of the engine's own side.
pub const WIN: i32 = i32::MAX;
/// Sentinel for a forced win of the opponent.
pub const LOSS: i32 = i32::MIN;
pub const DRAW: i32 = 0;

/// Opponent attacks cost this many times more than our own attacks of the same weight earn.
pub const OPPONENT_PENALTY: i32 = 10;

pub struct Scores;

impl Scores {
  // Each weight step is worth a hundred times the previous one
  pub fn multiplier(weight: AttackWeight) -> i32 {
    match weight {
      AttackWeight::One => 1,
      AttackWeight::Two => 100,
      AttackWeight::Three => 10_000,
    }
  }

  /// Sentinel for a forced win by whichever side is the maximizer (`true`) or not.
  pub fn sentinel(maximizer_wins: bool) -> i32 {
    if maximizer_wins {
      WIN
    } else {
      LOSS
    }
  }
}
