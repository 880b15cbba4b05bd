//! Geometric expansion of a search bracket's upper bound.
//!
//! Both rating inversions start from a bracket that usually, but not always,
//! contains the answer. The upper bound doubles until it reaches the target,
//! up to a fixed number of expansions.

use tracing::{debug, warn};

/// Outcome of expanding an upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Expansion {
    /// The target was reached at `upper`.
    Reached { upper: f64, expansions: usize },
    /// The expansion ceiling was hit without reaching the target.
    Exhausted { upper: f64, expansions: usize },
}

/// Doubles `initial` until `reaches` returns `true` for it.
///
/// Stops after `max_expansions` doublings, or earlier if the next bound would
/// no longer be finite.
pub(super) fn expand_upper(
    initial: f64,
    max_expansions: usize,
    mut reaches: impl FnMut(f64) -> bool,
) -> Expansion {
    let mut upper = initial;
    let mut expansions = 0;

    loop {
        if reaches(upper) {
            debug!(upper, expansions, "bracket contains target");
            return Expansion::Reached { upper, expansions };
        }

        if expansions == max_expansions || !(upper * 2.0).is_finite() {
            warn!(upper, expansions, "bracket expansion exhausted");
            return Expansion::Exhausted { upper, expansions };
        }

        upper *= 2.0;
        expansions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_bound_already_reaches() {
        let expansion = expand_upper(256.0, 10, |x| x >= 100.0);
        assert_eq!(
            expansion,
            Expansion::Reached {
                upper: 256.0,
                expansions: 0
            }
        );
    }

    #[test]
    fn doubles_until_reached() {
        let expansion = expand_upper(256.0, 10, |x| x >= 1000.0);
        assert_eq!(
            expansion,
            Expansion::Reached {
                upper: 1024.0,
                expansions: 2
            }
        );
    }

    #[test]
    fn stops_at_the_ceiling() {
        let mut calls = 0;
        let expansion = expand_upper(1.0, 3, |_| {
            calls += 1;
            false
        });

        assert_eq!(
            expansion,
            Expansion::Exhausted {
                upper: 8.0,
                expansions: 3
            }
        );
        assert_eq!(calls, 4);
    }

    #[test]
    fn stops_before_overflow() {
        let expansion = expand_upper(f64::MAX / 3.0, usize::MAX, |_| false);
        assert_eq!(
            expansion,
            Expansion::Exhausted {
                upper: f64::MAX / 3.0 * 2.0,
                expansions: 1
            }
        );
    }
}
