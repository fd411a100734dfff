//! The uniform contract every calculation endpoint implements.

use serde::Serialize;

use crate::error::CalcResult;
use crate::inputs::RequestParams;

/// Outcome of a successful evaluation: the formula-specific result object
/// plus the rendered work-shown derivation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub result: serde_json::Value,
    pub work_shown: String,
}

impl Evaluation {
    /// Serialize a typed result struct into the wire object.
    pub fn new(result: impl Serialize, work_shown: String) -> CalcResult<Self> {
        Ok(Self { result: serde_json::to_value(result)?, work_shown })
    }
}

/// A trait for calculation formulas.
/// Formulas are stateless and thread-safe; one evaluation never outlives
/// its request.
pub trait Formula: Send + Sync {
    /// The endpoint path segment, e.g. `grade-percent`.
    fn name(&self) -> &'static str;

    /// Query-string template for the API index and CLI catalog,
    /// e.g. `rise=<value>&run=<value>`.
    fn usage(&self) -> &'static str;

    /// Validate the raw parameters, apply the formula, and narrate the work.
    fn evaluate(&self, params: &RequestParams) -> CalcResult<Evaluation>;
}
