use chrono::{DateTime, Datelike, Utc};

use crate::common::Component;

/// The calendar point the baseline figures below were sampled at
/// (January 2023). Adjustments are exactly 1.0 here.
pub const EPOCH_YEAR: i32 = 2023;

impl Component {
    /// What an average system scored on this component at the reference epoch.
    pub fn baseline(self) -> f64 {
        match self {
            Self::CpuSc => 2800.0,
            Self::CpuMc => 18000.0,
            Self::Gpu => 45000.0,
            Self::Thermal => 150.0,
        }
    }

    /// Expected yearly multiplicative improvement. Components without a
    /// growth model (thermal envelopes do not inflate) stay at 1.0.
    pub fn yearly_growth(self) -> f64 {
        match self {
            Self::CpuSc => 1.18,
            Self::CpuMc => 1.22,
            Self::Gpu => 1.35,
            Self::Thermal => 1.0,
        }
    }
}

/// Fractional years between the reference epoch and `at`, with
/// partial-month precision. Negative before the epoch.
pub fn elapsed_years(at: &DateTime<Utc>) -> f64 {
    f64::from(at.year() - EPOCH_YEAR) + f64::from(at.month() - 1) / 12.0
}

/// How much higher this component is expected to score at `at` than at the
/// epoch to still count as average. "Average" rises every year.
pub fn adjustment(component: Component, at: &DateTime<Utc>) -> f64 {
    component.yearly_growth().powf(elapsed_years(at))
}

/// The baseline a raw figure must be measured against at `at`.
pub fn adjusted_baseline(component: Component, at: &DateTime<Utc>) -> f64 {
    component.baseline() * adjustment(component, at)
}
