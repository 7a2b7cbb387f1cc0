//! Tests arithmétiques : précédence, parenthèses, IEEE-754, formes refusées.
//!
//! Les expressions sont écrites comme le clavier les produit : opérateurs
//! entourés d’espaces ("7 + 3"), chiffres collés.

use proptest::prelude::*;

use super::format::format_nombre;
use super::{eval_expression, ErreurExpression};

fn ok(expr: &str) -> String {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_ok(expr: &str, attendu: &str) {
    assert_eq!(ok(expr), attendu, "expr={expr:?}");
}

#[test]
fn addition_simple() {
    assert_ok("7 + 3", "10");
}

#[test]
fn precedence_standard() {
    assert_ok("2 + 3 * 4", "14");
    assert_ok("2 * 3 + 4", "10");
    assert_ok("10 - 4 / 2", "8");
    assert_ok("1 + 2 * 3 - 4 / 2", "5");
}

#[test]
fn gauche_a_droite() {
    assert_ok("10 - 4 - 3", "3");
    assert_ok("100 / 10 / 5", "2");
    assert_ok("8 / 2 * 4", "16");
}

#[test]
fn parentheses() {
    assert_ok(" ( 2 + 3 )  * 4", "20");
    assert_ok(" (  ( 1 + 1 )  * 3 )  / 2", "3");
    assert_ok("2 *  ( 3 + 4 ) ", "14");
}

#[test]
fn prefixes() {
    assert_ok(" - 3 + 5", "2");
    assert_ok("5 *  - 2", "-10");
    assert_ok("5 -  - 2", "7");
    assert_ok(" + 4", "4");
    assert_ok(" -  ( 2 + 3 ) ", "-5");
}

#[test]
fn decimaux() {
    assert_ok("0.1 + 0.2", "0.30000000000000004");
    assert_ok(".5 + .5", "1");
    assert_ok("1 / 3", "0.3333333333333333");
    assert_ok("2.5 * 4", "10");
}

#[test]
fn division_par_zero_surfacee() {
    assert_ok("5 / 0", "Infinity");
    assert_ok(" - 5 / 0", "-Infinity");
    assert_ok("0 / 0", "NaN");
}

#[test]
fn grands_resultats() {
    assert_ok("999999999999 * 999999999999", "9.99999999998e+23");
    assert_ok("1000000000000 * 1000000000", "1e+21");
}

#[test]
fn formes_refusees() {
    let cas = [
        ("", ErreurExpression::Vide),
        ("   ", ErreurExpression::Vide),
        (" + ", ErreurExpression::Incomplete),
        ("7 + ", ErreurExpression::Incomplete),
        (" ( 7 + 3", ErreurExpression::ParenthesesNonFermees),
        ("7 + 3 ) ", ErreurExpression::ParentheseOrpheline),
        (" * 3", ErreurExpression::OperandeManquante('*')),
        ("7 3", ErreurExpression::ValeurInattendue),
        ("1.2.3", ErreurExpression::NombreInvalide("1.2.3".into())),
    ];
    for (src, attendu) in cas {
        assert_eq!(eval_expression(src).unwrap_err(), attendu, "src={src:?}");
    }
}

/* ------------------------ Propriétés ------------------------ */

fn op_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn appliquer(a: f64, op: char, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => a / b,
    }
}

fn rang(op: char) -> u8 {
    if op == '*' || op == '/' {
        2
    } else {
        1
    }
}

proptest! {
    /// a op1 b op2 c : la priorité standard décide du regroupement.
    #[test]
    fn prop_precedence_trois_termes(
        a in 0u32..10_000,
        b in 0u32..10_000,
        c in 0u32..10_000,
        op1 in op_strategy(),
        op2 in op_strategy(),
    ) {
        let (a, b, c) = (a as f64, b as f64, c as f64);
        let attendu = if rang(op2) > rang(op1) {
            appliquer(a, op1, appliquer(b, op2, c))
        } else {
            appliquer(appliquer(a, op1, b), op2, c)
        };

        let expr = format!("{a} {op1} {b} {op2} {c}");
        prop_assert_eq!(eval_expression(&expr).unwrap(), format_nombre(attendu));
    }

    /// Les parenthèses forcent le regroupement à gauche, quelle que soit la priorité.
    #[test]
    fn prop_parentheses_forcent(
        a in 0u32..1_000,
        b in 0u32..1_000,
        c in 0u32..1_000,
        op1 in op_strategy(),
        op2 in op_strategy(),
    ) {
        let (a, b, c) = (a as f64, b as f64, c as f64);
        let attendu = appliquer(appliquer(a, op1, b), op2, c);

        let expr = format!(" ( {a} {op1} {b} )  {op2} {c}");
        prop_assert_eq!(eval_expression(&expr).unwrap(), format_nombre(attendu));
    }

    /// Un opérateur final échoue toujours.
    #[test]
    fn prop_operateur_final_refuse(a in 0u32..1_000, op in op_strategy()) {
        let expr = format!("{a} {op} ");
        prop_assert_eq!(eval_expression(&expr).unwrap_err(), ErreurExpression::Incomplete);
    }
}
