//! Property and scenario tests for the equation solver public API.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use calc_core::{solve_equation, EquationInput, EquationType, Solution};

/// Render `v` as an explicit operator and magnitude, e.g. `+ 5` or `- 3`.
fn signed(v: i32) -> String {
    if v < 0 {
        format!("- {}", -v)
    } else {
        format!("+ {}", v)
    }
}

proptest! {
    #[test]
    fn linear_text_solution_satisfies_equation(
        a in -50i32..50,
        b in -100i32..100,
        d in -50i32..50,
        e in -100i32..100,
    ) {
        prop_assume!(a != d);
        let text = format!("{}x {} = {}x {}", a, signed(b), d, signed(e));
        let result = solve_equation(&EquationInput::equation(EquationType::Linear, text.as_str())).unwrap();

        let x = match result.solution() {
            Solution::OneSolution(x) => x,
            other => panic!("{} gave {:?}", text, other),
        };
        let (a, b, d, e) = (a as f64, b as f64, d as f64, e as f64);
        prop_assert!((a * x + b - (d * x + e)).abs() <= 1e-9, "{} -> x = {}", text, x);
    }

    #[test]
    fn quadratic_roots_are_zeros_in_ascending_order(
        a in -20i32..20,
        b in -50i32..50,
        c in -50i32..50,
    ) {
        prop_assume!(a != 0);
        let (a, b, c) = (a as f64, b as f64, c as f64);
        prop_assume!(b * b - 4.0 * a * c > 0.0);

        let result = solve_equation(&EquationInput::quadratic(a, b, c)).unwrap();
        let roots = match result.solution() {
            Solution::TwoRoots(roots) => roots,
            other => panic!("expected two roots, got {:?}", other),
        };

        prop_assert!(roots[0] <= roots[1]);
        for x in roots {
            let scale = (a * x * x).abs() + (b * x).abs() + c.abs() + 1.0;
            prop_assert!((a * x * x + b * x + c).abs() <= 1e-9 * scale);
        }
    }

    #[test]
    fn repeated_solves_are_identical(
        a in -20i32..20,
        b in -50i32..50,
        c in -50i32..50,
    ) {
        let text = format!("{}x^2 {}x {} = 0", a, signed(b), signed(c));
        let input = EquationInput::equation(EquationType::Quadratic, text.as_str());

        let first = solve_equation(&input).unwrap();
        let second = solve_equation(&input).unwrap();
        prop_assert_eq!(first.normalized_form(), second.normalized_form());
        prop_assert_eq!(first.result_label(), second.result_label());
        prop_assert_eq!(first.roots(), second.roots());
    }

    #[test]
    fn zero_leading_coefficient_degrades_to_linear(b in -50i32..50, c in -50i32..50) {
        let (b, c) = (b as f64, c as f64);
        let degraded = solve_equation(&EquationInput::quadratic(0.0, b, c)).unwrap();
        let direct = solve_equation(&EquationInput::linear(b, c)).unwrap();

        prop_assert_eq!(degraded.equation_type(), EquationType::Linear);
        prop_assert_eq!(direct.equation_type(), EquationType::Linear);
        prop_assert_eq!(degraded.solution(), direct.solution());
        prop_assert_eq!(degraded.normalized_form(), direct.normalized_form());
    }
}

#[test]
fn scenario_linear_text() {
    let result = solve_equation(&EquationInput::equation(EquationType::Linear, "2x + 5 = 15")).unwrap();
    assert_eq!(result.solution(), Solution::OneSolution(5.0));
}

#[test]
fn scenario_quadratic_text() {
    let result = solve_equation(&EquationInput::equation(EquationType::Quadratic, "x^2 + 5x + 6 = 0")).unwrap();
    let roots = result.roots();
    assert_abs_diff_eq!(roots[0], -3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(roots[1], -2.0, epsilon = 1e-12);
    assert_eq!(result.discriminant(), Some(1.0));
}

#[test]
fn scenario_repeated_root() {
    let result = solve_equation(&EquationInput::quadratic(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(result.solution(), Solution::OneRoot(0.0));
    assert_eq!(result.discriminant(), Some(0.0));
}

#[test]
fn scenario_no_real_roots() {
    let result = solve_equation(&EquationInput::quadratic(1.0, 0.0, 1.0)).unwrap();
    assert_eq!(result.discriminant(), Some(-4.0));
    assert_eq!(result.result_label(), "no real roots");
}

#[test]
fn scenario_identity() {
    let result = solve_equation(&EquationInput::equation(EquationType::Linear, "3 = 3")).unwrap();
    assert_eq!(result.solution(), Solution::InfiniteSolutions);
    assert_eq!(result.result_label(), "infinite solutions");
}

#[test]
fn scenario_contradiction() {
    let result = solve_equation(&EquationInput::equation(EquationType::Linear, "0x + 4 = 0")).unwrap();
    assert_eq!(result.solution(), Solution::NoSolution);
    assert_eq!(result.result_label(), "no solutions");
}

#[test]
fn scenario_degradation_law() {
    let quadratic = solve_equation(&EquationInput::quadratic(0.0, 2.0, -6.0)).unwrap();
    let linear = solve_equation(&EquationInput::linear(2.0, -6.0)).unwrap();
    assert_eq!(quadratic.equation_type(), EquationType::Linear);
    assert_eq!(quadratic.result_label(), linear.result_label());
    assert_eq!(quadratic.roots(), vec![3.0]);
}

#[test]
fn results_never_carry_non_finite_numbers() {
    let big = format!("1{}", "0".repeat(310));
    let inputs = [
        EquationInput::equation(EquationType::Linear, format!("{big}x = 5")),
        EquationInput::equation(EquationType::Quadratic, format!("x^2 + {big}x = 0")),
        EquationInput::quadratic(1.0, 1e200, 0.0),
    ];
    for input in &inputs {
        match solve_equation(input) {
            Ok(result) => panic!("{:?} solved to {:?}", input, result.solution()),
            Err(err) => assert!(
                matches!(err.error_code(), "EQUATION_PARSE" | "CALCULATION_FAILED"),
                "{}",
                err
            ),
        }
    }
}

#[test]
fn parse_failures_are_loud() {
    for text in ["2xy + 5 = 15", "2x + 5", "x = 1 = 2", "= 5", "x^3 = 1"] {
        let err = solve_equation(&EquationInput::equation(EquationType::Quadratic, text)).unwrap_err();
        assert_eq!(err.error_code(), "EQUATION_PARSE", "{}", text);
    }
}
