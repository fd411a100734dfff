//! Grade Percent Calculator
//!
//! Grade (%) = (Rise ÷ Run) × 100, with rise and run in feet.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GradePercentResult {
    primary_result: String,
    grade_percent: String,
}

#[derive(Debug, Default)]
pub struct GradePercent;

impl Formula for GradePercent {
    fn name(&self) -> &'static str {
        "grade-percent"
    }

    fn usage(&self) -> &'static str {
        "rise=<value>&run=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [rise, run] = params.require_f64s(["rise", "run"], "Missing rise or run parameters")?;

        if run == 0.0 {
            return Err(CalcError::domain("Run cannot be zero (division by zero)"));
        }

        let grade_percent = (rise / run) * 100.0;

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Rise = {} ft", num(rise)))
            .step(format!("Run = {} ft", num(run)))
            .blank()
            .line("Calculation:")
            .step("Grade (%) = (Rise ÷ Run) × 100")
            .step(format!("Grade (%) = ({} ÷ {}) × 100", num(rise), num(run)))
            .step(format!("Grade (%) = {grade_percent:.2}%"))
            .render();

        Evaluation::new(
            GradePercentResult {
                primary_result: format!("{grade_percent:.2}%"),
                grade_percent: format!("{grade_percent:.2}"),
            },
            work_shown,
        )
    }
}
