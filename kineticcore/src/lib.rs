/*!
 * KineticCore turns four raw hardware benchmark figures (single-core,
 * multi-core, GPU, TDP) into a normalized performance rating, a tier
 * classification, and a per-component modernity report.
 *
 * The library is pure arithmetic: callers hand over a
 * [`report::SystemSample`] and the evaluation instant, and get back a
 * [`report::ScoreReport`]. All I/O lives in the CLI crate.
 */

pub mod common;
pub mod reference;
pub mod report;
pub mod scoring;
pub mod strata;

pub use common::Component;
pub use report::{analyze, ScoreReport, SystemSample};
