use std::path::PathBuf;

use structopt::StructOpt;

use crate::export::ExportFormat;

/* structopt surfaces the Display of the error, so anyhow works here */
fn numeric(s: &str) -> anyhow::Result<f64> {
    kineticcore::common::parse_score(s).ok_or_else(|| anyhow::anyhow!("not a number: {:?}", s))
}

#[derive(StructOpt)]
#[structopt(
    name = "kineticcore",
    about = "Understand your system's power at a glance"
)]
pub struct Options {
    /// Single-core CPU benchmark score. Prompted for when missing.
    #[structopt(long, parse(try_from_str = numeric))]
    pub single_core: Option<f64>,

    /// Multi-core CPU benchmark score. Prompted for when missing.
    #[structopt(long, parse(try_from_str = numeric))]
    pub multi_core: Option<f64>,

    /// GPU (OpenCL) benchmark score. Prompted for when missing.
    #[structopt(long, parse(try_from_str = numeric))]
    pub gpu: Option<f64>,

    /// Thermal design power in watts. Defaults to 150.
    #[structopt(long, parse(try_from_str = numeric))]
    pub thermal: Option<f64>,

    /// Write the report to a file as json, csv or txt.
    #[structopt(long)]
    pub export: Option<ExportFormat>,

    /// Where to write the exported report. Defaults to
    /// kineticcore_report_<timestamp>.<ext> in the working directory.
    #[structopt(long, parse(from_os_str))]
    pub output: Option<PathBuf>,
}
