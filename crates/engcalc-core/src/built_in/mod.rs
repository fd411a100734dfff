//! Built-in formulas, one module per endpoint.

// Slope / grade calculators
pub mod grade_percent;
pub mod horizontal_distance;
pub mod slope;
pub mod slope_angle;
pub mod vertical_rise;

// Algebra & trigonometry
pub mod quadratic_equation;
pub mod trigonometric;

// Measurement
pub mod percent_error;

// Electrical
pub mod ohms_law;
pub mod power_vi;
pub mod resistance_series;
