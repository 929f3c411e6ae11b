//! Composite ranking score for a single candidate.
//!
//! The score starts at the weighted distance and subtracts small bonuses for
//! open entities and malls. Lower is better. Distance dominates: the bonuses
//! break ties between nearby candidates but a clearly closer closed store
//! still outranks a distant open mall.

use crate::Kind;

/// Points subtracted, before weighting, when a candidate is open now.
pub const OPEN_NOW_BONUS: f64 = 5.0;

/// Tunable weights applied by [`ScoreWeights::score`].
///
/// The defaults reproduce the production ranking: distance weight `1.0`,
/// open-status weight `1.0` applied to [`OPEN_NOW_BONUS`], and a `0.1`
/// bonus for malls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the distance in kilometres.
    pub distance: f64,
    /// Multiplier applied to [`OPEN_NOW_BONUS`] for open candidates.
    pub open_status: f64,
    /// Amount subtracted for [`Kind::Mall`] candidates.
    pub mall_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 1.0,
            open_status: 1.0,
            mall_bonus: 0.1,
        }
    }
}

impl ScoreWeights {
    /// Score a candidate at `distance_km` from the origin.
    ///
    /// Only `open_now == Some(true)` earns the open bonus and only
    /// `Some(Kind::Mall)` earns the mall bonus.
    ///
    /// # Examples
    /// ```
    /// use mallmap_core::{Kind, ScoreWeights};
    ///
    /// let weights = ScoreWeights::default();
    /// let open_mall = weights.score(8.0, Some(Kind::Mall), Some(true));
    /// assert!((open_mall - 2.9).abs() < 1e-9);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "scores are weighted floating-point sums"
    )]
    pub fn score(&self, distance_km: f64, kind: Option<Kind>, open_now: Option<bool>) -> f64 {
        let mut score = self.distance * distance_km;
        if open_now == Some(true) {
            score -= self.open_status * OPEN_NOW_BONUS;
        }
        if kind == Some(Kind::Mall) {
            score -= self.mall_bonus;
        }
        score
    }
}

/// Score a candidate with the default [`ScoreWeights`].
#[must_use]
pub fn score(distance_km: f64, kind: Option<Kind>, open_now: Option<bool>) -> f64 {
    ScoreWeights::default().score(distance_km, kind, open_now)
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests use float maths for assertions"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.0, None, None, 3.0)]
    #[case(3.0, Some(Kind::Store), Some(false), 3.0)]
    #[case(3.0, Some(Kind::Store), Some(true), -2.0)]
    #[case(3.0, Some(Kind::Mall), None, 2.9)]
    #[case(3.0, Some(Kind::Mall), Some(true), -2.1)]
    fn applies_bonuses(
        #[case] distance: f64,
        #[case] kind: Option<Kind>,
        #[case] open_now: Option<bool>,
        #[case] expected: f64,
    ) {
        assert!((score(distance, kind, open_now) - expected).abs() < 1e-9);
    }

    #[rstest]
    fn closer_closed_store_beats_far_open_mall() {
        let store = score(1.0, Some(Kind::Store), Some(false));
        let mall = score(20.0, Some(Kind::Mall), Some(true));
        assert!(store < mall);
    }

    #[rstest]
    fn custom_weights_scale_components() {
        let weights = ScoreWeights {
            distance: 2.0,
            open_status: 0.0,
            mall_bonus: 1.0,
        };
        let value = weights.score(4.0, Some(Kind::Mall), Some(true));
        assert!((value - 7.0).abs() < 1e-9);
    }
}
