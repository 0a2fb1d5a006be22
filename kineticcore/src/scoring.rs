use anyhow::ensure;
use chrono::{DateTime, Utc};
use log::debug;

use crate::common::Component;
use crate::reference;
use crate::report::SystemSample;

/* guard for denominators and logarithms */
pub(crate) const EPSILON: f64 = 1e-9;

/* composite weights; must sum to 1.0 */
const WEIGHT_CPU_SC: f64 = 0.35;
const WEIGHT_CPU_MC: f64 = 0.35;
const WEIGHT_GPU: f64 = 0.25;
const WEIGHT_BALANCE: f64 = 0.05;

/// Applied on top of the saturating curve so the GPU figure keeps
/// discriminating between top-end cards where the curve has flattened.
const GPU_SHAPING_EXPONENT: f64 = 1.3;

/// Map a raw figure against its reference onto the saturating curve
/// `x / sqrt(1 + x^2)`: 0 at 0, strictly increasing, approaching 1 as the
/// ratio grows without bound, finite for every non-negative ratio.
///
/// # Errors
/// Errors if the reference is not strictly positive - a broken baseline
/// table, not a user input problem.
pub fn saturate(value: f64, reference: f64) -> anyhow::Result<f64> {
    ensure!(
        reference > EPSILON,
        "non-positive reference baseline: {}",
        reference
    );
    let x = value / reference;
    Ok(x / (1.0 + x * x).sqrt())
}

/// The three benchmark figures mapped onto the saturating curve against
/// their time-adjusted baselines, GPU shaping already applied.
#[derive(Clone, Copy, Debug)]
pub struct Normalized {
    pub cpu_sc: f64,
    pub cpu_mc: f64,
    pub gpu: f64,
}

impl Normalized {
    pub fn compute(sample: &SystemSample, at: &DateTime<Utc>) -> anyhow::Result<Self> {
        let cpu_sc = saturate(
            sample.cpu_sc,
            reference::adjusted_baseline(Component::CpuSc, at),
        )?;
        let cpu_mc = saturate(
            sample.cpu_mc,
            reference::adjusted_baseline(Component::CpuMc, at),
        )?;
        let gpu = saturate(sample.gpu, reference::adjusted_baseline(Component::Gpu, at))?
            .powf(GPU_SHAPING_EXPONENT);
        Ok(Self { cpu_sc, cpu_mc, gpu })
    }

    fn values(&self) -> [f64; 3] {
        [self.cpu_sc, self.cpu_mc, self.gpu]
    }

    fn weakest(&self) -> f64 {
        self.cpu_sc.min(self.cpu_mc).min(self.gpu)
    }
}

/// How evenly the three normalized figures are spread, as a multiplicative
/// factor in (0, 1]. Perfect parity gives 1.0; a lopsided build (say a
/// flagship GPU behind a weak CPU) shrinks it.
///
/// The dispersion metric is the ratio of geometric to arithmetic mean,
/// which the AM-GM inequality keeps at or below 1.
pub fn balance_factor(norms: &Normalized) -> f64 {
    let values = norms.values();
    let geometric = (values.iter().map(|v| (v + EPSILON).ln()).sum::<f64>() / 3.0).exp();
    let arithmetic = values.iter().sum::<f64>() / 3.0;
    let harmony = geometric / (arithmetic + EPSILON);
    (3.0 * (harmony - 1.0)).exp()
}

/// Fraction knocked off the composite for running hotter than the
/// reference envelope. 0 exactly at or below the reference wattage,
/// strictly increasing above it, and kept below 1 so the discount can
/// never flip a score negative.
pub fn thermal_penalty(tdp: f64) -> f64 {
    let ratio = tdp / Component::Thermal.baseline();
    let excess = (ratio - 1.0).max(0.0);
    (0.12 * excess.powf(1.7) / (1.0 + 0.5 * excess)).min(0.99)
}

/// Bonus or malus for the strength of the weakest link, in [0.8, 1.2].
fn synergy(norms: &Normalized) -> f64 {
    1.0 + 0.2 * (5.0 * (norms.weakest() - 0.6)).tanh()
}

/// What the composite step hands back: the score before any temporal
/// adjustment, plus the thermal penalty that went into it. The penalty
/// travels by value so repeated evaluations can never observe each
/// other's state.
#[derive(Clone, Copy, Debug)]
pub struct Breakdown {
    pub base_score: f64,
    pub thermal_penalty: f64,
}

/// Weighted-geometric-mean composite over the normalized components, the
/// balance factor, the weakest-link synergy, and the thermal discount.
///
/// A zero in any normalized component zeroes the whole product - no
/// division or logarithm is taken on the raw values.
pub fn compose(sample: &SystemSample, at: &DateTime<Utc>) -> anyhow::Result<Breakdown> {
    let norms = Normalized::compute(sample, at)?;
    let balance = balance_factor(&norms);
    let penalty = thermal_penalty(sample.tdp);

    let weighted = norms.cpu_sc.powf(WEIGHT_CPU_SC)
        * norms.cpu_mc.powf(WEIGHT_CPU_MC)
        * norms.gpu.powf(WEIGHT_GPU)
        * balance.powf(WEIGHT_BALANCE);
    let base_score = 100.0 * synergy(&norms) * weighted * (1.0 - penalty);

    debug!(
        "norms [{:.4}, {:.4}, {:.4}], balance {:.4}, thermal penalty {:.4}",
        norms.cpu_sc, norms.cpu_mc, norms.gpu, balance, penalty
    );

    Ok(Breakdown {
        base_score,
        thermal_penalty: penalty,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::{balance_factor, compose, saturate, thermal_penalty, Normalized};
    use crate::report::SystemSample;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    fn roughly_equal(a: f64, b: f64) -> bool {
        if a == b {
            true
        } else if a.signum() != b.signum() || a == 0.0 || b == 0.0 {
            false
        } else {
            fn dif(x: f64, y: f64) -> f64 {
                (x.abs().ln() - y.abs().ln()).abs()
            }

            dif(a, b) <= dif(1.0, 1.00001)
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!(roughly_equal(
            super::WEIGHT_CPU_SC + super::WEIGHT_CPU_MC + super::WEIGHT_GPU + super::WEIGHT_BALANCE,
            1.0
        ));
    }

    #[test]
    fn test_saturate_endpoints() {
        assert_eq!(saturate(0.0, 2800.0).unwrap(), 0.0);
        assert!(roughly_equal(
            saturate(2800.0, 2800.0).unwrap(),
            1.0 / 2.0f64.sqrt()
        ));
        /* far past the baseline the curve flattens out just under 1 */
        let extreme = saturate(2800.0 * 1e6, 2800.0).unwrap();
        assert!(extreme < 1.0);
        assert!(extreme > 0.999);
    }

    #[test]
    fn test_saturate_is_monotonic() {
        let mut previous = -1.0;
        for value in (0..200).map(|i| f64::from(i) * 500.0) {
            let normalized = saturate(value, 18000.0).unwrap();
            assert!(normalized > previous);
            previous = normalized;
        }
    }

    #[test]
    fn test_saturate_rejects_broken_baseline() {
        assert!(saturate(2800.0, 0.0).is_err());
        assert!(saturate(2800.0, -150.0).is_err());
    }

    #[test]
    fn test_balance_is_one_at_parity() {
        let norms = Normalized {
            cpu_sc: 0.7,
            cpu_mc: 0.7,
            gpu: 0.7,
        };
        assert_eq!(balance_factor(&norms), 1.0);
    }

    #[test]
    fn test_balance_shrinks_with_dispersion() {
        let even = Normalized {
            cpu_sc: 0.6,
            cpu_mc: 0.6,
            gpu: 0.6,
        };
        let mild = Normalized {
            cpu_sc: 0.5,
            cpu_mc: 0.6,
            gpu: 0.7,
        };
        let lopsided = Normalized {
            cpu_sc: 0.1,
            cpu_mc: 0.6,
            gpu: 0.9,
        };
        let all_zero = Normalized {
            cpu_sc: 0.0,
            cpu_mc: 0.0,
            gpu: 0.0,
        };

        assert!(balance_factor(&mild) < balance_factor(&even));
        assert!(balance_factor(&lopsided) < balance_factor(&mild));
        assert!(balance_factor(&lopsided) > 0.0);
        assert!(balance_factor(&all_zero).is_finite());
    }

    #[test]
    fn test_thermal_penalty_is_zero_up_to_the_envelope() {
        assert_eq!(thermal_penalty(0.0), 0.0);
        assert_eq!(thermal_penalty(65.0), 0.0);
        assert_eq!(thermal_penalty(150.0), 0.0);
    }

    #[test]
    fn test_thermal_penalty_grows_past_the_envelope() {
        /* double the envelope: 0.12 * 1^1.7 / (1 + 0.5) */
        assert!(roughly_equal(thermal_penalty(300.0), 0.08));

        let mut previous = 0.0;
        for tdp in (160..600).step_by(20) {
            let penalty = thermal_penalty(f64::from(tdp));
            assert!(penalty > previous);
            assert!(penalty < 1.0);
            previous = penalty;
        }
    }

    #[test]
    fn test_compose_at_epoch_parity() {
        let sample = SystemSample {
            cpu_sc: 2800.0,
            cpu_mc: 18000.0,
            gpu: 45000.0,
            tdp: 150.0,
        };
        let breakdown = compose(&sample, &epoch()).unwrap();

        assert_eq!(breakdown.thermal_penalty, 0.0);
        /* every ratio sits at 1.0 on the curve; the GPU shaping drags the
         * product a little under the 1/sqrt(2) mark */
        assert!(breakdown.base_score > 70.0);
        assert!(breakdown.base_score < 75.0);
    }

    #[test]
    fn test_compose_zeroes_on_zero_component() {
        let sample = SystemSample {
            cpu_sc: 2800.0,
            cpu_mc: 18000.0,
            gpu: 0.0,
            tdp: 150.0,
        };
        let breakdown = compose(&sample, &epoch()).unwrap();
        assert_eq!(breakdown.base_score, 0.0);
    }

    #[test]
    fn test_compose_is_monotonic_in_each_input() {
        let base = SystemSample {
            cpu_sc: 2800.0,
            cpu_mc: 18000.0,
            gpu: 45000.0,
            tdp: 150.0,
        };
        let score = compose(&base, &epoch()).unwrap().base_score;

        let better_cpu = SystemSample {
            cpu_sc: 3400.0,
            ..base
        };
        let better_gpu = SystemSample {
            gpu: 60000.0,
            ..base
        };
        let hotter = SystemSample { tdp: 280.0, ..base };

        assert!(compose(&better_cpu, &epoch()).unwrap().base_score > score);
        assert!(compose(&better_gpu, &epoch()).unwrap().base_score > score);
        assert!(compose(&hotter, &epoch()).unwrap().base_score < score);
    }

    #[test]
    fn test_normalized_values_stay_in_range() {
        for gpu in &[0.0, 10000.0, 45000.0, 200000.0, 5000000.0] {
            let sample = SystemSample {
                cpu_sc: 2800.0,
                cpu_mc: 18000.0,
                gpu: *gpu,
                tdp: 150.0,
            };
            let norms = Normalized::compute(&sample, &epoch()).unwrap();
            for value in norms.values().iter() {
                assert!(*value >= 0.0);
                assert!(*value <= 1.05);
            }
        }
    }
}
