//! Combined Slope Calculator
//!
//! The original combined endpoint: slope percent and angle from one call.
//! Its validation differs from the split calculators and is kept as-is:
//! one shared "Invalid input values" guard covers both unparsable values
//! and a zero run, and the result object has no `primaryResult`.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::{RequestParams, parse_f64};

#[derive(Serialize)]
struct SlopeResult {
    slope: String,
    angle: String,
}

#[derive(Debug, Default)]
pub struct Slope;

impl Formula for Slope {
    fn name(&self) -> &'static str {
        "slope"
    }

    fn usage(&self) -> &'static str {
        "rise=<value>&run=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let (raw_rise, raw_run) = match (params.get("rise"), params.get("run")) {
            (Some(rise), Some(run)) => (rise, run),
            _ => return Err(CalcError::missing("Missing rise or run")),
        };

        let (rise, run) = match (parse_f64(raw_rise), parse_f64(raw_run)) {
            (Some(rise), Some(run)) if run != 0.0 => (rise, run),
            _ => return Err(CalcError::invalid_number("Invalid input values")),
        };

        let slope = (rise / run) * 100.0;
        let angle = (rise / run).atan().to_degrees();

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Rise = {} ft", num(rise)))
            .step(format!("Run = {} ft", num(run)))
            .blank()
            .line("Calculations:")
            .step(format!("Slope (%) = (Rise ÷ Run) × 100 = {slope:.2}%"))
            .step(format!("Angle = arctan(Rise ÷ Run) = {angle:.2}°"))
            .render();

        Evaluation::new(
            SlopeResult { slope: format!("{slope:.2}"), angle: format!("{angle:.2}") },
            work_shown,
        )
    }
}
