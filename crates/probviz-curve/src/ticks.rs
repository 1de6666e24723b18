//! Axis tick positions and label decimation.

use probviz_stats::{DistributionSpec, Family};
use serde::Serialize;

use crate::domain::DomainScale;

/// X axis divisions of a normal chart.
pub const NORMAL_X_DIVISIONS: usize = 8;
/// X axis divisions of exponential and continuous uniform charts.
pub const EXPONENTIAL_X_DIVISIONS: usize = 10;
/// Y axis divisions of every density chart.
pub const Y_DIVISIONS: usize = 5;

/// Category count above which discrete axis labels are decimated.
const DENSE_CATEGORY_COUNT: usize = 30;
/// Approximate number of labels kept after decimation.
const DECIMATED_LABEL_COUNT: usize = 20;

/// `divisions + 1` evenly spaced values from `min` to `max` inclusive.
///
/// ```
/// # use probviz_curve::ticks::linear_ticks;
/// assert_eq!(linear_ticks(-4.0, 4.0, 8), [-4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn linear_ticks(min: f64, max: f64, divisions: usize) -> Vec<f64> {
    if divisions == 0 {
        return vec![min];
    }
    (0..=divisions)
        .map(|i| min + (i as f64 / divisions as f64) * (max - min))
        .collect()
}

/// `divisions + 1` values from 0 to `max_y`.
#[must_use]
pub fn y_ticks(max_y: f64, divisions: usize) -> Vec<f64> {
    linear_ticks(0.0, max_y, divisions)
}

/// X ticks for a resolved domain.
///
/// Continuous families get evenly spaced ticks. Discrete families get one
/// tick per integer category; pair them with [`discrete_label_mask`] to decide
/// which ones carry a label.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn x_ticks(domain: &DomainScale) -> Vec<f64> {
    match domain.family {
        Family::Normal => linear_ticks(domain.min_x, domain.max_x, NORMAL_X_DIVISIONS),
        Family::Exponential | Family::Uniform => {
            linear_ticks(domain.min_x, domain.max_x, EXPONENTIAL_X_DIVISIONS)
        }
        Family::Poisson | Family::UniformDiscrete => {
            domain.categories().map(|k| k as f64).collect()
        }
    }
}

/// Which of `total` discrete categories get a text label.
///
/// Up to 30 categories are all labelled. Beyond that every
/// `ceil(total / 20)`-th category is labelled, starting with the first. The last
/// category is labelled only when the one before it is not, so two labels
/// never crowd the right end of the axis.
///
/// # Examples
///
/// ```
/// # use probviz_curve::ticks::discrete_label_mask;
/// assert!(discrete_label_mask(30).into_iter().all(|show| show));
///
/// // 41 categories: step 3, labels at 0, 3, ..., 39 and none at 40
/// let mask = discrete_label_mask(41);
/// assert!(mask[0] && mask[3] && mask[39]);
/// assert!(!mask[1] && !mask[40]);
/// ```
#[must_use]
pub fn discrete_label_mask(total: usize) -> Vec<bool> {
    if total <= DENSE_CATEGORY_COUNT {
        return vec![true; total];
    }
    let step = total.div_ceil(DECIMATED_LABEL_COUNT);
    let mut mask = (0..total).map(|i| i % step == 0).collect::<Vec<_>>();
    mask[total - 1] = !mask[total - 2];
    mask
}

/// A y axis tick of a discrete uniform chart, labelled as a fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionTick {
    pub value: f64,
    pub label: String,
}

/// Y ticks at the mass `1/(b - a + 1)` of every discrete uniform curve.
///
/// Curves sharing a mass share a tick. Ticks are ordered from the tallest
/// down, and specs of other families are ignored.
///
/// ```
/// # use probviz_curve::ticks::fraction_ticks;
/// # use probviz_stats::DistributionSpec;
/// let ticks = fraction_ticks(&[
///     DistributionSpec::UniformDiscrete { a: 1, b: 6 },
///     DistributionSpec::UniformDiscrete { a: 3, b: 3 },
///     DistributionSpec::UniformDiscrete { a: 0, b: 5 },
/// ]);
/// let labels = ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
/// assert_eq!(labels, ["1", "1/6"]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn fraction_ticks(specs: &[DistributionSpec]) -> Vec<FractionTick> {
    let mut denominators = specs
        .iter()
        .filter_map(|spec| match *spec {
            DistributionSpec::UniformDiscrete { a, b } => Some(b.abs_diff(a) + 1),
            _ => None,
        })
        .collect::<Vec<_>>();
    denominators.sort_unstable();
    denominators.dedup();

    denominators
        .into_iter()
        .map(|n| FractionTick {
            value: 1.0 / n as f64,
            label: if n == 1 { "1".to_owned() } else { format!("1/{n}") },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{color::COMMON_COLORS, config::CurveConfig};

    #[test]
    fn test_exponential_ticks() {
        let curve = CurveConfig::new(DistributionSpec::Exponential { lambda: 1.0 }, COMMON_COLORS[0]);
        let domain = DomainScale::resolve(Family::Exponential, &[curve]).unwrap();
        let ticks = x_ticks(&domain);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[10], 5.0);
        assert!((ticks[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_discrete_ticks_are_categories() {
        let curve = CurveConfig::new(DistributionSpec::UniformDiscrete { a: 2, b: 4 }, COMMON_COLORS[0]);
        let domain = DomainScale::resolve(Family::UniformDiscrete, &[curve]).unwrap();
        assert_eq!(x_ticks(&domain), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(1.0, 5), [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(y_ticks(0.0, 5), [0.0; 6]);
    }

    #[test]
    fn test_label_mask_keeps_last_when_previous_hidden() {
        // 31 categories: step 2, labels at even indices; 29 is hidden so 30 is kept
        let mask = discrete_label_mask(31);
        assert!(mask[30]);
        assert!(!mask[29]);
        // 32 categories: 30 is labelled, so 31 is dropped
        let mask = discrete_label_mask(32);
        assert!(mask[30]);
        assert!(!mask[31]);
    }

    #[test]
    fn test_fraction_ticks_ignore_other_families() {
        let ticks = fraction_ticks(&[
            DistributionSpec::Poisson { lambda: 2.0 },
            DistributionSpec::UniformDiscrete { a: 0, b: 3 },
            DistributionSpec::UniformDiscrete { a: 10, b: 11 },
        ]);
        assert_eq!(
            ticks,
            [
                FractionTick {
                    value: 0.5,
                    label: "1/2".to_owned()
                },
                FractionTick {
                    value: 0.25,
                    label: "1/4".to_owned()
                },
            ]
        );
    }

    proptest! {
        #[test]
        fn label_mask_shape(total in 1usize..500) {
            let mask = discrete_label_mask(total);
            prop_assert_eq!(mask.len(), total);
            prop_assert!(mask[0]);
            if total > 30 {
                prop_assert!(!(mask[total - 1] && mask[total - 2]));
                prop_assert!(mask.iter().filter(|&&show| show).count() <= 22);
            }
        }

        #[test]
        fn linear_ticks_hit_both_ends(min in -1e3f64..1e3, width in 0.0f64..1e3, divisions in 1usize..20) {
            let ticks = linear_ticks(min, min + width, divisions);
            prop_assert_eq!(ticks.len(), divisions + 1);
            prop_assert_eq!(ticks[0], min);
            prop_assert!((ticks[divisions] - (min + width)).abs() < 1e-9);
        }
    }
}
