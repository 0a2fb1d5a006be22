use std::{
    fmt::Display,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use kineticcore::ScoreReport;
use log::info;

use crate::render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Txt => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Txt),
            _ => bail!("no such export format: {}", s),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Default export filename, stamped with the evaluation instant.
pub fn default_filename(format: ExportFormat, at: &DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "kineticcore_report_{}.{}",
        at.format("%Y%m%d-%H%M%S"),
        format.extension()
    ))
}

/// Write the report to `path` in the chosen format. Every format is a
/// lossless serialization of the same structure.
pub fn export(report: &ScoreReport, format: ExportFormat, path: &Path) -> anyhow::Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    match format {
        ExportFormat::Json => serde_json::to_writer_pretty(file, report)?,
        ExportFormat::Csv => write_csv(file, report)?,
        ExportFormat::Txt => render::write_report(&mut file, report)?,
    }

    info!("report exported as {} to {}", format, path.display());
    Ok(())
}

/* a summary record, then one record per component */
fn write_csv<W: Write>(writer: W, report: &ScoreReport) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(writer);

    writer.write_record(&[
        "base_score",
        "temporal_score",
        "thermal_penalty_percent",
        "tier",
        "tier_description",
    ])?;
    writer.write_record(&[
        report.base_score.to_string(),
        report.temporal_score.to_string(),
        report.thermal_penalty_percent.to_string(),
        report.tier.name.clone(),
        report.tier.description.clone(),
    ])?;

    writer.write_record(&[
        "component",
        "raw_value",
        "modernity_percent",
        "health_percent",
        "assessment",
    ])?;
    for row in &report.components {
        writer.write_record(&[
            row.component.to_string(),
            row.raw_value.to_string(),
            row.modernity_percent.to_string(),
            row.health_percent.to_string(),
            row.assessment.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
