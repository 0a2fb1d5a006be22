use std::io::{self, BufRead, Write};

use anyhow::bail;
use kineticcore::common::parse_score;
use kineticcore::{Component, SystemSample};

use crate::export::ExportFormat;
use crate::options::Options;

/// What input collection produced. `interactive` records whether any
/// figure came off a prompt rather than a flag.
pub struct Collection {
    pub sample: SystemSample,
    pub interactive: bool,
}

/// Gather the four figures, prompting on stdin for any that were not
/// passed as flags. Returns `None` when input ends before all figures
/// are supplied - that is a cancellation, not an error.
pub fn collect(options: &Options) -> anyhow::Result<Option<Collection>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut interactive = false;

    let cpu_sc = match resolve(
        options.single_core,
        &mut lines,
        "Single-Core Score",
        None,
        &mut interactive,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };
    let cpu_mc = match resolve(
        options.multi_core,
        &mut lines,
        "Multi-Core Score",
        None,
        &mut interactive,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };
    let gpu = match resolve(options.gpu, &mut lines, "OpenCL Score", None, &mut interactive)? {
        Some(value) => value,
        None => return Ok(None),
    };
    let tdp = match resolve(
        options.thermal,
        &mut lines,
        "TDP (Watts) [Default 150]",
        Some(Component::Thermal.baseline()),
        &mut interactive,
    )? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(Collection {
        sample: SystemSample::new(cpu_sc, cpu_mc, gpu, Some(tdp)),
        interactive,
    }))
}

fn resolve<B: BufRead>(
    flag: Option<f64>,
    lines: &mut io::Lines<B>,
    label: &str,
    default: Option<f64>,
    interactive: &mut bool,
) -> anyhow::Result<Option<f64>> {
    match flag {
        Some(value) => Ok(Some(value)),
        None => {
            *interactive = true;
            ask(lines, label, default)
        }
    }
}

fn ask<B: BufRead>(
    lines: &mut io::Lines<B>,
    label: &str,
    default: Option<f64>,
) -> anyhow::Result<Option<f64>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let line = match lines.next() {
        Some(line) => line?,
        /* input closed mid-collection */
        None => return Ok(None),
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
        if let Some(default) = default {
            return Ok(Some(default));
        }
    }

    match parse_score(trimmed) {
        Some(value) => Ok(Some(value)),
        None => bail!("{} must be a number, got {:?}", label, trimmed),
    }
}

/// The interactive flow offers an export once the report has rendered.
/// A blank or unrecognized answer skips it.
pub fn ask_export() -> anyhow::Result<Option<ExportFormat>> {
    print!("\nExport report? (json/csv/txt, blank to skip): ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(line.trim().parse::<ExportFormat>().ok())
}
