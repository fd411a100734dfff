//! Vertical Rise Calculator
//!
//! Rise = Slope × Run. No domain guard: any finite slope and run are
//! acceptable.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::CalcResult;
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerticalRiseResult {
    primary_result: String,
    vertical_rise: String,
}

#[derive(Debug, Default)]
pub struct VerticalRise;

impl Formula for VerticalRise {
    fn name(&self) -> &'static str {
        "vertical-rise"
    }

    fn usage(&self) -> &'static str {
        "slope=<value>&run=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [slope, run] =
            params.require_f64s(["slope", "run"], "Missing slope or run parameters")?;

        let rise = slope * run;

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Slope = {}", num(slope)))
            .step(format!("Run = {} ft", num(run)))
            .blank()
            .line("Calculation:")
            .step("Rise = Slope × Run")
            .step(format!("Rise = {} × {}", num(slope), num(run)))
            .step(format!("Rise = {rise:.2} ft"))
            .render();

        Evaluation::new(
            VerticalRiseResult {
                primary_result: format!("{rise:.2} ft"),
                vertical_rise: format!("{rise:.2}"),
            },
            work_shown,
        )
    }
}
