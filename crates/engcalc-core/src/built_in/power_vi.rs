//! Electrical Power Calculator
//!
//! Computes P from any two of voltage, current, and resistance:
//! P = V × I, P = V² ÷ R, or P = I² × R. When all three arrive, the first
//! complete pair in source order wins (V,I then V,R then I,R). Branches
//! that can derive the missing quantity report it as an extra line; a
//! quantity that is neither given nor derived is reported as
//! "Not provided".

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::{GivenPair, RequestParams};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PowerResult {
    primary_result: String,
    power: String,
    voltage: String,
    current: String,
    resistance: String,
}

fn field(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value:.2} {unit}"),
        None => "Not provided".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct PowerVi;

impl Formula for PowerVi {
    fn name(&self) -> &'static str {
        "power-vi"
    }

    fn usage(&self) -> &'static str {
        "voltage=<value>&current=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let voltage = params.optional_f64("voltage")?;
        let current = params.optional_f64("current")?;
        let resistance = params.optional_f64("resistance")?;

        let pair = GivenPair::resolve(voltage, current, resistance).ok_or_else(|| {
            CalcError::wrong_parameter_count(
                "Provide at least voltage and current, or voltage and resistance, or current and resistance",
            )
        })?;

        let (power, voltage, current, resistance, work_shown) = match pair {
            GivenPair::VoltageCurrent { voltage, current } => {
                let power = voltage * current;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Voltage (V) = {} V", num(voltage)))
                    .step(format!("Current (I) = {} A", num(current)))
                    .blank()
                    .line("Calculation:")
                    .step("Power (P) = V × I")
                    .step(format!("P = {} × {}", num(voltage), num(current)))
                    .step(format!("P = {power:.2} W"))
                    .render();
                (power, Some(voltage), Some(current), resistance, work_shown)
            }
            GivenPair::VoltageResistance { voltage, resistance } => {
                if resistance == 0.0 {
                    return Err(CalcError::domain("Resistance cannot be zero"));
                }
                let power = voltage * voltage / resistance;
                let derived_current = voltage / resistance;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Voltage (V) = {} V", num(voltage)))
                    .step(format!("Resistance (R) = {} Ω", num(resistance)))
                    .blank()
                    .line("Calculation:")
                    .step("Power (P) = V² ÷ R")
                    .step(format!("P = {}² ÷ {}", num(voltage), num(resistance)))
                    .step(format!("P = {} ÷ {}", num(voltage * voltage), num(resistance)))
                    .step(format!("P = {power:.2} W"))
                    .blank()
                    .line(format!(
                        "Additional: Current (I) = V ÷ R = {derived_current:.2} A"
                    ))
                    .render();
                (power, Some(voltage), Some(derived_current), Some(resistance), work_shown)
            }
            GivenPair::CurrentResistance { current, resistance } => {
                let power = current * current * resistance;
                let derived_voltage = current * resistance;
                let work_shown = Derivation::new()
                    .line("Given:")
                    .step(format!("Current (I) = {} A", num(current)))
                    .step(format!("Resistance (R) = {} Ω", num(resistance)))
                    .blank()
                    .line("Calculation:")
                    .step("Power (P) = I² × R")
                    .step(format!("P = {}² × {}", num(current), num(resistance)))
                    .step(format!("P = {} × {}", num(current * current), num(resistance)))
                    .step(format!("P = {power:.2} W"))
                    .blank()
                    .line(format!(
                        "Additional: Voltage (V) = I × R = {derived_voltage:.2} V"
                    ))
                    .render();
                (power, Some(derived_voltage), Some(current), Some(resistance), work_shown)
            }
        };

        Evaluation::new(
            PowerResult {
                primary_result: format!("{power:.2} W"),
                power: format!("{power:.2} W"),
                voltage: field(voltage, "V"),
                current: field(current, "A"),
                resistance: field(resistance, "Ω"),
            },
            work_shown,
        )
    }
}
