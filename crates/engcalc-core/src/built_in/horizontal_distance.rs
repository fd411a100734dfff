//! Horizontal Distance Calculator
//!
//! Run = Rise ÷ Slope, with rise in feet and slope as a ratio.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HorizontalDistanceResult {
    primary_result: String,
    horizontal_distance: String,
}

#[derive(Debug, Default)]
pub struct HorizontalDistance;

impl Formula for HorizontalDistance {
    fn name(&self) -> &'static str {
        "horizontal-distance"
    }

    fn usage(&self) -> &'static str {
        "rise=<value>&slope=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [rise, slope] =
            params.require_f64s(["rise", "slope"], "Missing rise or slope parameters")?;

        if slope == 0.0 {
            return Err(CalcError::domain("Slope cannot be zero (division by zero)"));
        }

        let run = rise / slope;

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Rise = {} ft", num(rise)))
            .step(format!("Slope = {}", num(slope)))
            .blank()
            .line("Calculation:")
            .step("Run = Rise ÷ Slope")
            .step(format!("Run = {} ÷ {}", num(rise), num(slope)))
            .step(format!("Run = {run:.2} ft"))
            .render();

        Evaluation::new(
            HorizontalDistanceResult {
                primary_result: format!("{run:.2} ft"),
                horizontal_distance: format!("{run:.2}"),
            },
            work_shown,
        )
    }
}
