mod export;
mod options;
mod prompt;
mod render;

use std::io::{self, Write};

use chrono::Utc;
use structopt::StructOpt;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = options::Options::from_args();

    println!("=== KineticCore Performance Evaluation ===");
    println!("Understand your system's power at a glance\n");

    let collection = match prompt::collect(&options)? {
        Some(collection) => collection,
        None => {
            println!("\nEvaluation cancelled");
            return Ok(());
        }
    };

    let now = Utc::now();
    let report = kineticcore::analyze(&collection.sample, &now)?;

    println!();
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    render::write_report(&mut lock, &report)?;
    lock.flush()?;
    drop(lock);

    let format = match options.export {
        Some(format) => Some(format),
        None if collection.interactive => prompt::ask_export()?,
        None => None,
    };

    if let Some(format) = format {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| export::default_filename(format, &now));
        export::export(&report, format, &path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
