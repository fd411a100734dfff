//! Slope Angle Calculator
//!
//! θ = arctan(Rise ÷ Run), reported in degrees (radians as an auxiliary
//! field).

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlopeAngleResult {
    primary_result: String,
    angle_degrees: String,
    angle_radians: String,
}

#[derive(Debug, Default)]
pub struct SlopeAngle;

impl Formula for SlopeAngle {
    fn name(&self) -> &'static str {
        "slope-angle"
    }

    fn usage(&self) -> &'static str {
        "rise=<value>&run=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [rise, run] = params.require_f64s(["rise", "run"], "Missing rise or run parameters")?;

        if run == 0.0 {
            return Err(CalcError::domain("Run cannot be zero (division by zero)"));
        }

        let angle_radians = (rise / run).atan();
        let angle_degrees = angle_radians.to_degrees();

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Rise = {} ft", num(rise)))
            .step(format!("Run = {} ft", num(run)))
            .blank()
            .line("Calculation:")
            .step("θ = arctan(Rise ÷ Run)")
            .step(format!("θ = arctan({} ÷ {})", num(rise), num(run)))
            .step(format!("θ = arctan({:.4})", rise / run))
            .step(format!("θ = {angle_degrees:.2}°"))
            .render();

        Evaluation::new(
            SlopeAngleResult {
                primary_result: format!("{angle_degrees:.2}°"),
                angle_degrees: format!("{angle_degrees:.2}"),
                angle_radians: format!("{angle_radians:.4}"),
            },
            work_shown,
        )
    }
}
