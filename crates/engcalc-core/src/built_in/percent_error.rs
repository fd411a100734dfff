//! Percent Error Calculator
//!
//! Percent Error = |Experimental − Theoretical| / Theoretical × 100. The
//! theoretical value is not taken by absolute value, so a negative
//! theoretical yields a negative percent.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PercentErrorResult {
    primary_result: String,
    percent_error: String,
    absolute_error: String,
}

#[derive(Debug, Default)]
pub struct PercentError;

impl Formula for PercentError {
    fn name(&self) -> &'static str {
        "percent-error"
    }

    fn usage(&self) -> &'static str {
        "experimental=<value>&theoretical=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [experimental, theoretical] = params.require_f64s(
            ["experimental", "theoretical"],
            "Missing experimental or theoretical values",
        )?;

        if theoretical == 0.0 {
            return Err(CalcError::domain(
                "Theoretical value cannot be zero (division by zero)",
            ));
        }

        let absolute_error = (experimental - theoretical).abs();
        let percent_error = absolute_error / theoretical * 100.0;

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Experimental Value = {}", num(experimental)))
            .step(format!("Theoretical Value = {}", num(theoretical)))
            .blank()
            .line("Calculation:")
            .step("Percent Error = |Experimental - Theoretical| / Theoretical × 100%")
            .step(format!(
                "Percent Error = |{} - {}| / {} × 100%",
                num(experimental),
                num(theoretical),
                num(theoretical)
            ))
            .step(format!(
                "Percent Error = |{:.4}| / {} × 100%",
                experimental - theoretical,
                num(theoretical)
            ))
            .step(format!(
                "Percent Error = {absolute_error:.4} / {} × 100%",
                num(theoretical)
            ))
            .step(format!("Percent Error = {percent_error:.2}%"))
            .render();

        Evaluation::new(
            PercentErrorResult {
                primary_result: format!("{percent_error:.2}%"),
                percent_error: format!("{percent_error:.2}"),
                absolute_error: format!("{absolute_error:.4}"),
            },
            work_shown,
        )
    }
}
