//! Name-to-formula lookup used by the HTTP router and the CLI catalog.

use std::collections::HashMap;

use tracing::debug;

use crate::built_in::{
    grade_percent::GradePercent, horizontal_distance::HorizontalDistance, ohms_law::OhmsLaw,
    percent_error::PercentError, power_vi::PowerVi, quadratic_equation::QuadraticEquation,
    resistance_series::ResistanceSeries, slope::Slope, slope_angle::SlopeAngle,
    trigonometric::Trigonometric, vertical_rise::VerticalRise,
};
use crate::formula::Formula;

pub struct FormulaRegistry {
    formulas: HashMap<&'static str, Box<dyn Formula>>,
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::with_built_in()
    }
}

impl FormulaRegistry {
    pub fn new() -> Self {
        Self { formulas: HashMap::new() }
    }

    /// Registry preloaded with every built-in formula.
    pub fn with_built_in() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GradePercent));
        registry.register(Box::new(SlopeAngle));
        registry.register(Box::new(HorizontalDistance));
        registry.register(Box::new(VerticalRise));
        registry.register(Box::new(Slope));
        registry.register(Box::new(QuadraticEquation));
        registry.register(Box::new(Trigonometric));
        registry.register(Box::new(PercentError));
        registry.register(Box::new(OhmsLaw));
        registry.register(Box::new(PowerVi));
        registry.register(Box::new(ResistanceSeries));
        registry
    }

    pub fn register(&mut self, formula: Box<dyn Formula>) {
        debug!(formula = formula.name(), "registering formula");
        self.formulas.insert(formula.name(), formula);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formula> {
        self.formulas.get(name).map(|f| f.as_ref())
    }

    /// Registered formula names, sorted for stable catalogs.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.formulas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Iterate formulas in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Formula> {
        let mut formulas: Vec<_> = self.formulas.values().map(|f| f.as_ref()).collect();
        formulas.sort_unstable_by_key(|f| f.name());
        formulas.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_registry_serves_all_eleven_formulas() {
        let registry = FormulaRegistry::with_built_in();
        assert_eq!(
            registry.names(),
            vec![
                "grade-percent",
                "horizontal-distance",
                "ohms-law",
                "percent-error",
                "power-vi",
                "quadratic-equation",
                "resistance-series",
                "slope",
                "slope-angle",
                "trigonometric",
                "vertical-rise",
            ]
        );
        assert!(registry.get("grade-percent").is_some());
        assert!(registry.get("no-such-formula").is_none());
    }
}
