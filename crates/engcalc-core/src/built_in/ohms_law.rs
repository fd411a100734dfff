//! Ohm's Law Solver
//!
//! Given exactly two of voltage, current, and resistance, solves V = I × R
//! for the third. The parameter count is checked before numeric parsing,
//! so three supplied values are rejected even when one of them is garbage.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::{GivenPair, RequestParams};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OhmsLawResult {
    primary_result: String,
    voltage: String,
    current: String,
    resistance: String,
}

#[derive(Debug, Default)]
pub struct OhmsLaw;

impl Formula for OhmsLaw {
    fn name(&self) -> &'static str {
        "ohms-law"
    }

    fn usage(&self) -> &'static str {
        "voltage=<value>&current=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let supplied = ["voltage", "current", "resistance"]
            .iter()
            .filter(|name| params.has(name))
            .count();
        if supplied != 2 {
            return Err(CalcError::wrong_parameter_count(
                "Provide exactly 2 of the 3 parameters: voltage, current, resistance",
            ));
        }

        let voltage = params.optional_f64("voltage")?;
        let current = params.optional_f64("current")?;
        let resistance = params.optional_f64("resistance")?;

        // Exactly two are present, so resolution cannot fail.
        let pair = GivenPair::resolve(voltage, current, resistance).ok_or_else(|| {
            CalcError::internal("electrical pair resolution failed after count check")
        })?;

        match pair {
            GivenPair::VoltageCurrent { voltage, current } => {
                if current == 0.0 {
                    return Err(CalcError::domain("Current cannot be zero"));
                }
                let resistance = voltage / current;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Voltage (V) = {} V", num(voltage)))
                    .step(format!("Current (I) = {} A", num(current)))
                    .blank()
                    .line("Using Ohm's Law: V = I × R")
                    .line("Solving for Resistance: R = V ÷ I")
                    .step(format!("R = {} ÷ {}", num(voltage), num(current)))
                    .step(format!("R = {resistance:.2} Ω"))
                    .render();
                Evaluation::new(
                    OhmsLawResult {
                        primary_result: format!("{resistance:.2} Ω"),
                        voltage: format!("{} V", num(voltage)),
                        current: format!("{} A", num(current)),
                        resistance: format!("{resistance:.2} Ω"),
                    },
                    work_shown,
                )
            }
            GivenPair::VoltageResistance { voltage, resistance } => {
                if resistance == 0.0 {
                    return Err(CalcError::domain("Resistance cannot be zero"));
                }
                let current = voltage / resistance;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Voltage (V) = {} V", num(voltage)))
                    .step(format!("Resistance (R) = {} Ω", num(resistance)))
                    .blank()
                    .line("Using Ohm's Law: V = I × R")
                    .line("Solving for Current: I = V ÷ R")
                    .step(format!("I = {} ÷ {}", num(voltage), num(resistance)))
                    .step(format!("I = {current:.2} A"))
                    .render();
                Evaluation::new(
                    OhmsLawResult {
                        primary_result: format!("{current:.2} A"),
                        voltage: format!("{} V", num(voltage)),
                        current: format!("{current:.2} A"),
                        resistance: format!("{} Ω", num(resistance)),
                    },
                    work_shown,
                )
            }
            GivenPair::CurrentResistance { current, resistance } => {
                let voltage = current * resistance;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Current (I) = {} A", num(current)))
                    .step(format!("Resistance (R) = {} Ω", num(resistance)))
                    .blank()
                    .line("Using Ohm's Law: V = I × R")
                    .step(format!("V = {} × {}", num(current), num(resistance)))
                    .step(format!("V = {voltage:.2} V"))
                    .render();
                Evaluation::new(
                    OhmsLawResult {
                        primary_result: format!("{voltage:.2} V"),
                        voltage: format!("{voltage:.2} V"),
                        current: format!("{} A", num(current)),
                        resistance: format!("{} Ω", num(resistance)),
                    },
                    work_shown,
                )
            }
        }
    }
}
