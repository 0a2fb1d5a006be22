use anyhow::bail;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::{fmt::Display, str::FromStr};

/// A scored subsystem - one of the four raw inputs to an evaluation.
#[derive(SerializeDisplay, DeserializeFromStr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    CpuSc,
    CpuMc,
    Gpu,
    Thermal,
}

impl Component {
    /// Every component, in report order. Thermal comes last.
    pub const ALL: [Component; 4] = [Self::CpuSc, Self::CpuMc, Self::Gpu, Self::Thermal];

    /// Given a label like `cpu_sc` or `single-core`, try to return the corresponding [`Component`].
    /// Only considers alphanumeric characters - separators like `_` and `-` are filtered out.
    pub fn from_label<S: AsRef<str>>(s: S) -> Option<Self> {
        match s
            .as_ref()
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .as_str()
        {
            "cpusc" | "singlecore" | "sc" => Some(Self::CpuSc),
            "cpumc" | "multicore" | "mc" => Some(Self::CpuMc),
            "gpu" | "opencl" => Some(Self::Gpu),
            "thermal" | "tdp" => Some(Self::Thermal),
            _ => None,
        }
    }
}

impl FromStr for Component {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_label(s) {
            Some(thing) => Ok(thing),
            None => bail!("no such component"),
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::CpuSc => "CPU_SC",
                Self::CpuMc => "CPU_MC",
                Self::Gpu => "GPU",
                Self::Thermal => "THERMAL",
            }
        )
    }
}

/*
 * Convert a benchmark figure as users type it to a plain number.
 * "18,000"  -> 18000.0
 * " 2800 "  -> 2800.0
 * "45000.5" -> 45000.5
 */
pub fn parse_score<T: AsRef<str>>(s: T) -> Option<f64> {
    let cleaned = s
        .as_ref()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect::<String>();
    (!cleaned.is_empty())
        .then(|| cleaned.parse::<f64>().ok())
        .flatten()
        .filter(|v| v.is_finite())
}
