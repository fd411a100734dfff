//! Algebraic properties of the built-in formulas.

use engcalc_core::{Evaluation, FormulaRegistry, RequestParams};
use proptest::prelude::*;

fn evaluate(name: &str, pairs: &[(&str, &str)]) -> Evaluation {
    let registry = FormulaRegistry::with_built_in();
    let formula = registry.get(name).expect("formula registered");
    formula.evaluate(&RequestParams::from_pairs(pairs)).expect("valid inputs evaluate")
}

fn string_field(eval: &Evaluation, name: &str) -> String {
    eval.result[name].as_str().expect("string field").to_string()
}

/// Parse a formatted quantity like "6.00 Ω" back into its number.
fn parse_quantity(text: &str) -> f64 {
    text.split_whitespace().next().expect("leading number").parse().expect("parses")
}

proptest! {
    #[test]
    fn grade_percent_matches_the_formula(
        rise in -1000.0f64..1000.0,
        run in 0.1f64..1000.0,
    ) {
        let eval = evaluate(
            "grade-percent",
            &[("rise", &rise.to_string()), ("run", &run.to_string())],
        );
        let expected = format!("{:.2}", (rise / run) * 100.0);
        prop_assert_eq!(string_field(&eval, "gradePercent"), expected);
    }

    #[test]
    fn quadratic_roots_round_trip_through_sum_and_product(
        r1 in -50.0f64..50.0,
        r2 in -50.0f64..50.0,
    ) {
        prop_assume!((r1 - r2).abs() > 0.01);
        // a = 1, b = -(r1 + r2), c = r1 * r2 has exactly the roots r1 and r2.
        let b = -(r1 + r2);
        let c = r1 * r2;
        let eval = evaluate(
            "quadratic-equation",
            &[("a", "1"), ("b", &b.to_string()), ("c", &c.to_string())],
        );
        prop_assert!(eval.result["hasRealSolutions"].as_bool().unwrap());
        let x1: f64 = string_field(&eval, "x1").parse().unwrap();
        let x2: f64 = string_field(&eval, "x2").parse().unwrap();
        let (hi, lo) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        prop_assert!((x1 - hi).abs() < 1e-3, "x1 {} vs {}", x1, hi);
        prop_assert!((x2 - lo).abs() < 1e-3, "x2 {} vs {}", x2, lo);
    }

    #[test]
    fn ohms_law_is_self_consistent(
        voltage in 10.0f64..1000.0,
        current in 0.1f64..10.0,
    ) {
        let eval = evaluate(
            "ohms-law",
            &[("voltage", &voltage.to_string()), ("current", &current.to_string())],
        );
        let resistance = parse_quantity(&string_field(&eval, "resistance"));

        // Feed the rounded resistance back in; the recovered current must
        // agree with the original within 2-decimal rounding effects.
        let eval = evaluate(
            "ohms-law",
            &[("voltage", &voltage.to_string()), ("resistance", &resistance.to_string())],
        );
        let recovered = parse_quantity(&string_field(&eval, "current"));
        prop_assert!(
            (recovered - current).abs() <= current * 0.01 + 0.01,
            "current {} recovered as {}",
            current,
            recovered
        );
    }

    #[test]
    fn series_resistance_is_permutation_invariant(
        values in prop::collection::vec(0.0f64..100.0, 2..6),
    ) {
        let forward =
            values.iter().map(f64::to_string).collect::<Vec<_>>().join(",");
        let reversed =
            values.iter().rev().map(f64::to_string).collect::<Vec<_>>().join(",");

        let a = evaluate("resistance-series", &[("resistances", &forward)]);
        let b = evaluate("resistance-series", &[("resistances", &reversed)]);
        let total_a = parse_quantity(&string_field(&a, "totalResistance"));
        let total_b = parse_quantity(&string_field(&b, "totalResistance"));
        prop_assert!((total_a - total_b).abs() <= 0.01);
    }

    #[test]
    fn power_branches_agree_on_consistent_inputs(
        voltage in 1.0f64..100.0,
        current in 0.5f64..10.0,
    ) {
        let vi = evaluate(
            "power-vi",
            &[("voltage", &voltage.to_string()), ("current", &current.to_string())],
        );
        let resistance = voltage / current;
        let ir = evaluate(
            "power-vi",
            &[("current", &current.to_string()), ("resistance", &resistance.to_string())],
        );
        let p_vi = parse_quantity(&string_field(&vi, "power"));
        let p_ir = parse_quantity(&string_field(&ir, "power"));
        prop_assert!((p_vi - p_ir).abs() <= 0.01 + p_vi * 1e-6);
    }
}
