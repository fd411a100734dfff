//! Series Resistance Calculator
//!
//! Sums a comma-separated list of resistances. Guards run in a fixed
//! order: every entry must parse, no entry may be negative, and at least
//! two entries are required.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::{RequestParams, parse_f64};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesResult {
    primary_result: String,
    total_resistance: String,
    individual_resistances: Vec<String>,
    resistance_count: usize,
}

#[derive(Debug, Default)]
pub struct ResistanceSeries;

impl Formula for ResistanceSeries {
    fn name(&self) -> &'static str {
        "resistance-series"
    }

    fn usage(&self) -> &'static str {
        "resistances=<v1,v2,...>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let raw = params
            .get("resistances")
            .ok_or_else(|| CalcError::missing("Missing resistances parameter"))?;

        let resistances = raw
            .split(',')
            .map(parse_f64)
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(|| {
                CalcError::invalid_number("All resistance values must be valid numbers")
            })?;

        if resistances.iter().any(|r| *r < 0.0) {
            return Err(CalcError::domain("Resistance values cannot be negative"));
        }
        if resistances.len() < 2 {
            return Err(CalcError::domain(
                "At least 2 resistances required for series calculation",
            ));
        }

        let total: f64 = resistances.iter().sum();

        let mut derivation = Derivation::new().line("Given Resistances in Series:");
        for (i, r) in resistances.iter().enumerate() {
            derivation = derivation.step(format!("R{} = {} Ω", i + 1, num(*r)));
        }
        let symbols = (1..=resistances.len())
            .map(|i| format!("R{i}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let values =
            resistances.iter().map(|r| num(*r)).collect::<Vec<_>>().join(" + ");
        let work_shown = derivation
            .blank()
            .line("Series Resistance Formula:")
            .step(format!("Rtotal = {symbols}"))
            .step(format!("Rtotal = {values}"))
            .step(format!("Rtotal = {total:.2} Ω"))
            .blank()
            .line("Note: In series circuits, total resistance equals the sum of all individual resistances.")
            .render();

        Evaluation::new(
            SeriesResult {
                primary_result: format!("{total:.2} Ω"),
                total_resistance: format!("{total:.2} Ω"),
                individual_resistances: resistances.iter().map(|r| format!("{} Ω", num(*r))).collect(),
                resistance_count: resistances.len(),
            },
            work_shown,
        )
    }
}
