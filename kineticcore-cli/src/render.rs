use std::io::Write;

use kineticcore::ScoreReport;

/*
 * Pure presentation: every figure below comes straight off the report.
 * Anything that needs computing belongs in the library, not here.
 */
pub fn write_report<W: Write>(out: &mut W, report: &ScoreReport) -> std::io::Result<()> {
    writeln!(out, "===============================================")?;
    writeln!(out, "  Instant Rating: {:.0}/140", report.temporal_score)?;
    writeln!(out, "===============================================")?;
    writeln!(out)?;
    writeln!(out, "=== Detailed Analysis ===")?;
    writeln!(out, "Base Score: {}", report.base_score)?;
    writeln!(out, "Future-Adjusted Score: {}", report.temporal_score)?;
    writeln!(out, "Efficiency Penalty: -{}%", report.thermal_penalty_percent)?;
    writeln!(out)?;
    writeln!(out, "Performance Tier: {}", report.tier.name)?;
    writeln!(out, "Description: {}", report.tier.description)?;
    writeln!(out)?;
    writeln!(out, "=== Component Analysis ===")?;
    for row in &report.components {
        writeln!(
            out,
            "{}: {} -> {}% {} ({}% Health)",
            row.component, row.raw_value, row.modernity_percent, row.assessment, row.health_percent
        )?;
    }

    Ok(())
}
