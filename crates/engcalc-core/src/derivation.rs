//! Work-shown derivation text.
//!
//! Calculations answer with both a machine-usable result and a narrated
//! derivation showing the substituted values. [`Derivation`] collects the
//! lines in order and renders them into the single display string carried
//! in the response envelope. The text is display-only; nothing parses it.

/// Render a value the way the work-shown text quotes raw inputs: shortest
/// decimal form, with negative zero flattened to `0`.
pub fn num(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

/// Ordered builder for the work-shown block of a calculation.
#[derive(Debug, Default)]
pub struct Derivation {
    lines: Vec<String>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain line, e.g. a `Given:` or `Calculation:` heading.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Append a bulleted substitution step.
    pub fn step(mut self, text: impl Into<String>) -> Self {
        self.lines.push(format!("• {}", text.into()));
        self
    }

    /// Append an empty line separating sections.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// The finished display string.
    pub fn render(self) -> String {
        self.lines.join("\n")
    }
}
