//! Capture roll
//!
//! Decides whether a thrown ball catches a pokemon. Higher base experience
//! makes a catch less likely.

use rand::Rng;

/// Rolls are drawn uniformly from `0..CAPTURE_ROLL_RANGE`.
pub const CAPTURE_ROLL_RANGE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Roll met or beat the base experience
    Caught,
    /// Roll landed in the upper half below the base experience
    CloseEscape,
    /// Roll was at or below half the base experience
    Escaped,
}

/// Resolves a roll against a pokemon's base experience.
///
/// With base experience `b`: `roll >= b` catches, `b/2 < roll < b` is a near
/// miss, anything lower escapes outright.
pub fn resolve(roll: u32, base_experience: u32) -> CaptureOutcome {
    if roll >= base_experience {
        CaptureOutcome::Caught
    } else if roll > base_experience / 2 {
        CaptureOutcome::CloseEscape
    } else {
        CaptureOutcome::Escaped
    }
}

/// Draws a roll from `rng`.
pub fn roll<R: Rng>(rng: &mut R) -> u32 {
    rng.random_range(0..CAPTURE_ROLL_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_resolve_boundaries() {
        // Pikachu: base experience 112
        assert_eq!(resolve(112, 112), CaptureOutcome::Caught);
        assert_eq!(resolve(499, 112), CaptureOutcome::Caught);
        assert_eq!(resolve(111, 112), CaptureOutcome::CloseEscape);
        assert_eq!(resolve(57, 112), CaptureOutcome::CloseEscape);
        assert_eq!(resolve(56, 112), CaptureOutcome::Escaped);
        assert_eq!(resolve(0, 112), CaptureOutcome::Escaped);
    }

    #[test]
    fn test_zero_base_experience_always_caught() {
        assert_eq!(resolve(0, 0), CaptureOutcome::Caught);
    }

    #[test]
    fn test_base_experience_above_range_never_caught() {
        // Blissey: 608
        for roll in [0, 250, 304, 305, 499] {
            assert_ne!(resolve(roll, 608), CaptureOutcome::Caught);
        }
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert!(roll(&mut rng) < CAPTURE_ROLL_RANGE);
        }
    }

    proptest! {
        #[test]
        fn prop_outcome_is_monotonic_in_roll(
            base in 0u32..700,
            low in 0u32..500,
            high in 0u32..500,
        ) {
            prop_assume!(low <= high);
            let rank = |outcome: CaptureOutcome| match outcome {
                CaptureOutcome::Escaped => 0,
                CaptureOutcome::CloseEscape => 1,
                CaptureOutcome::Caught => 2,
            };
            prop_assert!(rank(resolve(low, base)) <= rank(resolve(high, base)));
        }
    }
}
