use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::common::Component;
use crate::reference;
use crate::scoring;
use crate::strata;

/// One evaluation's worth of raw benchmark figures. Built fresh per
/// evaluation, discarded afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemSample {
    pub cpu_sc: f64,
    pub cpu_mc: f64,
    pub gpu: f64,
    pub tdp: f64,
}

impl SystemSample {
    /// `tdp` falls back to the reference envelope when not supplied.
    pub fn new(cpu_sc: f64, cpu_mc: f64, gpu: f64, tdp: Option<f64>) -> Self {
        Self {
            cpu_sc,
            cpu_mc,
            gpu,
            tdp: tdp.unwrap_or_else(|| Component::Thermal.baseline()),
        }
    }

    pub fn get(&self, component: Component) -> f64 {
        match component {
            Component::CpuSc => self.cpu_sc,
            Component::CpuMc => self.cpu_mc,
            Component::Gpu => self.gpu,
            Component::Thermal => self.tdp,
        }
    }

    /// Reject figures the scoring arithmetic is not total over. Zero is
    /// allowed and scores zero; negative and non-finite figures are not.
    pub fn validate(&self) -> anyhow::Result<()> {
        for component in Component::ALL.iter().copied() {
            let value = self.get(component);
            if !value.is_finite() {
                bail!("{} must be a finite number, got {}", component, value);
            }
            if value < 0.0 {
                bail!("{} must not be negative, got {}", component, value);
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    Modern,
    Legacy,
}

impl Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Modern => "Modern",
                Self::Legacy => "Legacy",
            }
        )
    }
}

/// Modernity and health of a single component, measured against the
/// time-adjusted baseline by plain ratio. Intentionally simpler than the
/// saturating curve the composite runs on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub component: Component,
    pub raw_value: f64,
    pub modernity_percent: f64,
    pub health_percent: f64,
    pub assessment: Assessment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub description: String,
}

/// The full result of one evaluation. Immutable once built; everything a
/// renderer or exporter needs is in here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub base_score: f64,
    pub temporal_score: f64,
    pub thermal_penalty_percent: f64,
    pub tier: Tier,
    pub components: Vec<ComponentHealth>,
}

/// Run the full evaluation at the given instant.
///
/// The instant is a parameter rather than a clock read, so identical calls
/// at the same instant give identical reports.
pub fn analyze(sample: &SystemSample, at: &DateTime<Utc>) -> anyhow::Result<ScoreReport> {
    sample.validate()?;

    let breakdown = scoring::compose(sample, at)?;
    let temporal_score = breakdown.base_score * reference::adjustment(Component::CpuSc, at);
    let stratum = strata::classify(temporal_score);

    Ok(ScoreReport {
        base_score: round1(breakdown.base_score),
        temporal_score: round1(temporal_score),
        thermal_penalty_percent: round1(breakdown.thermal_penalty * 100.0),
        tier: Tier {
            name: stratum.name.to_string(),
            description: stratum.description.to_string(),
        },
        components: Component::ALL
            .iter()
            .map(|&component| component_health(component, sample.get(component), at))
            .collect(),
    })
}

fn component_health(component: Component, raw_value: f64, at: &DateTime<Utc>) -> ComponentHealth {
    let ratio = raw_value / component.baseline();
    let modernity = ratio / reference::adjustment(component, at);

    ComponentHealth {
        component,
        raw_value,
        modernity_percent: round1(modernity * 100.0),
        health_percent: round1((modernity.sqrt() * 100.0).clamp(0.0, 100.0)),
        assessment: if modernity >= 1.0 {
            Assessment::Modern
        } else {
            Assessment::Legacy
        },
    }
}

/* report figures carry one decimal place */
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
