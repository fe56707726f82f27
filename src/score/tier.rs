//! Tier classification: fused probability → safety / match / reach.

use crate::domain::Tier;

/// p ≥ this → safety.
pub const SAFETY_THRESHOLD: f64 = 0.75;
/// p ≥ this (and below the safety threshold) → match; below → reach.
pub const MATCH_THRESHOLD: f64 = 0.40;

/// Map a fused probability to its tier label.
///
/// Pure and total on [0, 1]; the three ranges are contiguous, disjoint, and
/// exhaustive.
pub fn classify_tier(probability: f64) -> Tier {
    if probability >= SAFETY_THRESHOLD {
        Tier::Safety
    } else if probability >= MATCH_THRESHOLD {
        Tier::Match
    } else {
        Tier::Reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_at_lower_edge() {
        assert_eq!(classify_tier(SAFETY_THRESHOLD), Tier::Safety);
        assert_eq!(classify_tier(MATCH_THRESHOLD), Tier::Match);
        assert_eq!(classify_tier(SAFETY_THRESHOLD - 1e-12), Tier::Match);
        assert_eq!(classify_tier(MATCH_THRESHOLD - 1e-12), Tier::Reach);
    }

    #[test]
    fn partition_is_contiguous_and_exhaustive() {
        // Sweep [0,1]; the label must step through reach → match → safety
        // exactly once, with no gaps.
        let mut seen = vec![];
        let mut p = 0.0;
        while p <= 1.0 {
            let tier = classify_tier(p);
            if seen.last() != Some(&tier) {
                seen.push(tier);
            }
            p += 1e-3;
        }
        assert_eq!(seen, vec![Tier::Reach, Tier::Match, Tier::Safety]);
    }

    #[test]
    fn endpoints() {
        assert_eq!(classify_tier(0.0), Tier::Reach);
        assert_eq!(classify_tier(1.0), Tier::Safety);
    }
}
