//! Trigonometric Function Evaluator
//!
//! Evaluates sin, cos, or tan of an angle given in degrees (the default)
//! or radians. Exact multiples of 90° cannot be detected from a
//! floating-point angle, so tangent is treated as undefined whenever the
//! computed value is non-finite or beyond [`TAN_UNDEFINED_LIMIT`].

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::{RequestParams, parse_f64};

/// Tangent magnitude beyond which the angle is reported as undefined.
pub const TAN_UNDEFINED_LIMIT: f64 = 1e15;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrigResult {
    primary_result: String,
    function: String,
    angle: f64,
    unit: String,
    result: String,
}

#[derive(Debug, Default)]
pub struct Trigonometric;

impl Formula for Trigonometric {
    fn name(&self) -> &'static str {
        "trigonometric"
    }

    fn usage(&self) -> &'static str {
        "angle=<value>&function=<sin|cos|tan>&unit=<degrees|radians>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let (raw_angle, function) = match (params.get("angle"), params.get("function")) {
            (Some(angle), Some(function)) => (angle, function.to_string()),
            _ => return Err(CalcError::missing("Missing angle or function parameters")),
        };
        let unit = params.get("unit").unwrap_or("degrees").to_string();

        let angle = parse_f64(raw_angle)
            .ok_or_else(|| CalcError::invalid_number("Invalid angle value"))?;

        let angle_in_radians = if unit == "degrees" { angle.to_radians() } else { angle };
        let angle_display =
            if unit == "degrees" { format!("{}°", num(angle)) } else { format!("{} rad", num(angle)) };

        let (value, function_name) = match function.as_str() {
            "sin" => (angle_in_radians.sin(), "Sine"),
            "cos" => (angle_in_radians.cos(), "Cosine"),
            "tan" => {
                let tan = angle_in_radians.tan();
                if !tan.is_finite() || tan.abs() > TAN_UNDEFINED_LIMIT {
                    return Err(CalcError::undefined(
                        "Tangent is undefined for this angle (90°, 270°, etc.)",
                    ));
                }
                (tan, "Tangent")
            }
            _ => return Err(CalcError::domain("Function must be sin, cos, or tan")),
        };

        let work_shown = Derivation::new()
            .line("Given:")
            .step(format!("Angle = {angle_display}"))
            .step(format!("Function = {function_name}"))
            .blank()
            .line("Calculation:")
            .step(format!("{function}({angle_display}) = {value:.6}"))
            .render();

        Evaluation::new(
            TrigResult {
                primary_result: format!("{value:.6}"),
                function,
                angle,
                unit,
                result: format!("{value:.6}"),
            },
            work_shown,
        )
    }
}
