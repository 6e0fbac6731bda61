use serde::{Deserialize, Serialize};

/// Full, half and empty star counts for one rating.
///
/// Every built-in policy guarantees `full + half + empty == star_count`
/// and `half <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarDistribution {
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

impl StarDistribution {
    pub fn new(full: u32, half: u32, empty: u32) -> Self {
        Self { full, half, empty }
    }

    pub fn total(&self) -> u32 {
        self.full + self.half + self.empty
    }
}

/// Decides how a fractional star value splits into full/half/empty stars.
///
/// `stars` arrives normalized and rounded to 3 decimal places. It may sit
/// marginally above `star_count` through float rounding, so implementations
/// clamp before deriving the full count.
pub trait StarDistributor {
    fn distribute(
        &self,
        stars: f64,
        allow_half: bool,
        half_threshold: f64,
        star_count: u32,
    ) -> StarDistribution;
}

impl<F> StarDistributor for F
where
    F: Fn(f64, bool, f64, u32) -> StarDistribution,
{
    fn distribute(
        &self,
        stars: f64,
        allow_half: bool,
        half_threshold: f64,
        star_count: u32,
    ) -> StarDistribution {
        self(stars, allow_half, half_threshold, star_count)
    }
}

/// Built-in distribution policies.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DistributorKind {
    /// Whole stars only, rounding up so a non-zero score never shows as empty
    FullOnly,
    /// Floor plus an optional half star when the remainder reaches the threshold
    HalfStar,
    /// Like `HalfStar`, but a perfect score is always all-full
    #[default]
    StrictFull,
}

impl StarDistributor for DistributorKind {
    fn distribute(
        &self,
        stars: f64,
        allow_half: bool,
        half_threshold: f64,
        star_count: u32,
    ) -> StarDistribution {
        match self {
            DistributorKind::FullOnly => full_only(stars, star_count),
            DistributorKind::HalfStar => half_star(stars, allow_half, half_threshold, star_count),
            DistributorKind::StrictFull => {
                strict_full(stars, allow_half, half_threshold, star_count)
            }
        }
    }
}

/// Ignores half-star settings entirely.
pub fn full_only(stars: f64, star_count: u32) -> StarDistribution {
    let full = clamp_stars(stars, star_count).ceil() as u32;
    let full = full.min(star_count);
    StarDistribution::new(full, 0, star_count - full)
}

pub fn half_star(
    stars: f64,
    allow_half: bool,
    half_threshold: f64,
    star_count: u32,
) -> StarDistribution {
    let stars = clamp_stars(stars, star_count);
    let full = stars.floor() as u32;
    let remainder = stars - f64::from(full);

    let half = u32::from(allow_half && remainder >= half_threshold);

    // Only reachable at exactly star_count with a zero threshold: the
    // would-be extra half star takes the place of the last full one.
    let (full, half) = if full + half > star_count {
        (star_count.saturating_sub(1), 1)
    } else {
        (full, half)
    };

    StarDistribution::new(full, half, star_count - full - half)
}

pub fn strict_full(
    stars: f64,
    allow_half: bool,
    half_threshold: f64,
    star_count: u32,
) -> StarDistribution {
    let clamped = clamp_stars(stars, star_count);
    if clamped == f64::from(star_count) {
        return StarDistribution::new(star_count, 0, 0);
    }
    half_star(clamped, allow_half, half_threshold, star_count)
}

fn clamp_stars(stars: f64, star_count: u32) -> f64 {
    stars.min(f64::from(star_count)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_only_rounds_up() {
        assert_eq!(full_only(3.8, 5), StarDistribution::new(4, 0, 1));
        assert_eq!(full_only(0.001, 5), StarDistribution::new(1, 0, 4));
        assert_eq!(full_only(3.0, 5), StarDistribution::new(3, 0, 2));
    }

    #[test]
    fn test_full_only_zero_and_max() {
        assert_eq!(full_only(0.0, 5), StarDistribution::new(0, 0, 5));
        assert_eq!(full_only(5.0, 5), StarDistribution::new(5, 0, 0));
    }

    #[test]
    fn test_full_only_ignores_half_settings() {
        let dist = DistributorKind::FullOnly.distribute(2.5, true, 0.0, 5);
        assert_eq!(dist, StarDistribution::new(3, 0, 2));
    }

    #[test]
    fn test_full_only_clamps_overflow() {
        assert_eq!(full_only(5.001, 5), StarDistribution::new(5, 0, 0));
    }

    #[test]
    fn test_half_star_above_threshold() {
        assert_eq!(half_star(3.8, true, 0.25, 5), StarDistribution::new(3, 1, 1));
        assert_eq!(half_star(6.3, true, 0.25, 7), StarDistribution::new(6, 1, 0));
        assert_eq!(half_star(4.362, true, 0.25, 7), StarDistribution::new(4, 1, 2));
    }

    #[test]
    fn test_half_star_below_threshold() {
        assert_eq!(half_star(4.1, true, 0.25, 5), StarDistribution::new(4, 0, 1));
    }

    #[test]
    fn test_half_star_threshold_is_inclusive() {
        assert_eq!(half_star(2.25, true, 0.25, 5), StarDistribution::new(2, 1, 2));
    }

    #[test]
    fn test_half_star_disabled() {
        assert_eq!(half_star(3.8, false, 0.25, 5), StarDistribution::new(3, 0, 2));
    }

    #[test]
    fn test_half_star_at_max_with_default_threshold_is_all_full() {
        // Remainder is 0 at the max, which stays below a 0.25 threshold
        assert_eq!(half_star(5.0, true, 0.25, 5), StarDistribution::new(5, 0, 0));
        assert_eq!(half_star(7.0, true, 0.25, 7), StarDistribution::new(7, 0, 0));
    }

    #[test]
    fn test_half_star_overflow_guard_at_max_with_zero_threshold() {
        // A zero threshold turns the zero remainder into a half star, and the
        // guard moves the last full star into the half slot.
        assert_eq!(half_star(5.0, true, 0.0, 5), StarDistribution::new(4, 1, 0));
    }

    #[test]
    fn test_half_star_zero_threshold_at_zero() {
        assert_eq!(half_star(0.0, true, 0.0, 5), StarDistribution::new(0, 1, 4));
        assert_eq!(half_star(0.0, false, 0.0, 5), StarDistribution::new(0, 0, 5));
    }

    #[test]
    fn test_half_star_clamps_rounding_overflow() {
        assert_eq!(half_star(5.001, true, 0.25, 5), StarDistribution::new(5, 0, 0));
        assert_eq!(half_star(5.001, true, 0.0, 5), StarDistribution::new(4, 1, 0));
    }

    #[test]
    fn test_strict_full_perfect_score() {
        assert_eq!(strict_full(5.0, true, 0.0, 5), StarDistribution::new(5, 0, 0));
        assert_eq!(strict_full(5.001, true, 0.25, 5), StarDistribution::new(5, 0, 0));
    }

    #[test]
    fn test_strict_full_matches_half_star_below_max() {
        for stars in [0.0, 0.3, 1.24, 2.5, 3.8, 4.1, 4.999] {
            assert_eq!(
                strict_full(stars, true, 0.25, 5),
                half_star(stars, true, 0.25, 5),
                "stars = {}",
                stars
            );
        }
    }

    #[test]
    fn test_closure_as_distributor() {
        let all_empty = |_: f64, _: bool, _: f64, count: u32| StarDistribution::new(0, 0, count);
        assert_eq!(all_empty.distribute(3.0, true, 0.25, 5).empty, 5);
    }

    #[test]
    fn test_distributor_kind_yaml_names() {
        let kind: DistributorKind = serde_saphyr::from_str("full-only").unwrap();
        assert_eq!(kind, DistributorKind::FullOnly);
        let kind: DistributorKind = serde_saphyr::from_str("half-star").unwrap();
        assert_eq!(kind, DistributorKind::HalfStar);
        let kind: DistributorKind = serde_saphyr::from_str("strict-full").unwrap();
        assert_eq!(kind, DistributorKind::StrictFull);
    }

    fn any_policy() -> impl Strategy<Value = DistributorKind> {
        prop_oneof![
            Just(DistributorKind::FullOnly),
            Just(DistributorKind::HalfStar),
            Just(DistributorKind::StrictFull),
        ]
    }

    proptest! {
        /// Property: the triple always sums to star_count with at most one half star.
        #[test]
        fn triple_covers_scale(
            policy in any_policy(),
            star_count in 1u32..12,
            fraction in 0.0f64..=1.0,
            allow_half in any::<bool>(),
            threshold in 0.0f64..=1.0,
        ) {
            let stars = fraction * f64::from(star_count);
            let dist = policy.distribute(stars, allow_half, threshold, star_count);
            prop_assert_eq!(dist.total(), star_count);
            prop_assert!(dist.half <= 1);
        }

        /// Property: more stars never means fewer full stars.
        #[test]
        fn full_is_monotonic(
            policy in any_policy(),
            star_count in 1u32..12,
            a in 0.0f64..=1.0,
            b in 0.0f64..=1.0,
            threshold in 0.01f64..=1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let count = f64::from(star_count);
            let low = policy.distribute(lo * count, true, threshold, star_count);
            let high = policy.distribute(hi * count, true, threshold, star_count);
            prop_assert!(low.full <= high.full);
        }
    }
}
