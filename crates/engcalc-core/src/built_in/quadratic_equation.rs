//! Quadratic Equation Solver
//!
//! Solves ax² + bx + c = 0 via the discriminant Δ = b² − 4ac. Branch
//! selection compares Δ against zero exactly (no epsilon) so boundary
//! behavior is reproducible: Δ > 0 gives two real roots, Δ == 0 one
//! repeated root, Δ < 0 a complex conjugate pair reported in the summary
//! text only.

use serde::Serialize;

use crate::derivation::{Derivation, num};
use crate::error::{CalcError, CalcResult};
use crate::formula::{Evaluation, Formula};
use crate::inputs::RequestParams;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuadraticResult {
    primary_result: String,
    discriminant: f64,
    has_real_solutions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    x1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<String>,
}

#[derive(Debug, Default)]
pub struct QuadraticEquation;

impl Formula for QuadraticEquation {
    fn name(&self) -> &'static str {
        "quadratic-equation"
    }

    fn usage(&self) -> &'static str {
        "a=<value>&b=<value>&c=<value>"
    }

    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation> {
        let [a, b, c] = params.require_f64s(["a", "b", "c"], "Missing a, b, or c parameters")?;

        if a == 0.0 {
            return Err(CalcError::domain(
                "Coefficient \"a\" cannot be zero (not a quadratic equation)",
            ));
        }

        let discriminant = b * b - 4.0 * a * c;

        let (solutions, x1, x2, x) = if discriminant > 0.0 {
            let root1 = (-b + discriminant.sqrt()) / (2.0 * a);
            let root2 = (-b - discriminant.sqrt()) / (2.0 * a);
            (
                format!("Two real solutions: x₁ = {root1:.4}, x₂ = {root2:.4}"),
                Some(format!("{root1:.4}")),
                Some(format!("{root2:.4}")),
                None,
            )
        } else if discriminant == 0.0 {
            let root = -b / (2.0 * a);
            (format!("One real solution: x = {root:.4}"), None, None, Some(format!("{root:.4}")))
        } else {
            let real = -b / (2.0 * a);
            let imaginary = (-discriminant).sqrt() / (2.0 * a);
            (
                format!(
                    "Two complex solutions: x₁ = {real:.4} + {imaginary:.4}i, x₂ = {real:.4} - {imaginary:.4}i"
                ),
                None,
                None,
                None,
            )
        };

        let work_shown = Derivation::new()
            .line(format!(
                "Given quadratic equation: {}x² + {}x + {} = 0",
                num(a),
                num(b),
                num(c)
            ))
            .blank()
            .line("Step 1: Calculate discriminant")
            .step("Δ = b² - 4ac")
            .step(format!("Δ = ({})² - 4({})({})", num(b), num(a), num(c)))
            .step(format!("Δ = {} - {}", num(b * b), num(4.0 * a * c)))
            .step(format!("Δ = {}", num(discriminant)))
            .blank()
            .line("Step 2: Apply quadratic formula")
            .step("x = (-b ± √Δ) / 2a")
            .step(format!("x = ({} ± √{}) / {}", num(-b), num(discriminant), num(2.0 * a)))
            .blank()
            .line(format!("Result: {solutions}"))
            .render();

        Evaluation::new(
            QuadraticResult {
                primary_result: solutions,
                discriminant,
                has_real_solutions: discriminant >= 0.0,
                x1,
                x2,
                x,
            },
            work_shown,
        )
    }
}
