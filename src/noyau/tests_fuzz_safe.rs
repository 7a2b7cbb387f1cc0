//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : aucune entrée ne panique ; Ok(..) n’est jamais vide ni "undefined"

use std::time::{Duration, Instant};

use super::eval_expression;
use super::format::format_nombre;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Expression bien formée + sa valeur de référence (même ordre d’opérations).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let n = rng.pick(1000) as f64;
        let n = if rng.pick(3) == 0 { n / 8.0 } else { n };
        return (format!("{n}"), n);
    }

    let (a, va) = gen_expr(rng, depth - 1);
    let (b, vb) = gen_expr(rng, depth - 1);

    // Totalement parenthésé : la référence n’a pas à connaître la précédence.
    match rng.pick(5) {
        0 => (format!(" ( {a} + {b} ) "), va + vb),
        1 => (format!(" ( {a} - {b} ) "), va - vb),
        2 => (format!(" ( {a} * {b} ) "), va * vb),
        3 => (format!(" ( {a} / {b} ) "), va / vb),
        _ => (format!(" -  ( {a} ) "), -va),
    }
}

/// Flux de touches quelconque (comme un utilisateur qui tape n’importe quoi).
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: [&str; 9] = ["7", "0", ".", " + ", " - ", " * ", " / ", " ( ", " ) "];
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2_000 {
        budget(start, Duration::from_secs(5));

        let (expr, attendu) = gen_expr(&mut rng, 4);
        let obtenu = eval_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(obtenu, format_nombre(attendu), "expr={expr:?}");
    }
}

#[test]
fn fuzz_bruit_ne_panique_jamais() {
    let start = Instant::now();
    let mut rng = Rng::new(42);

    for i in 0..5_000 {
        budget(start, Duration::from_secs(5));

        let n = 1 + (i % 24);
        let expr = gen_bruit(&mut rng, n);
        if let Ok(txt) = eval_expression(&expr) {
            assert!(!txt.is_empty(), "expr={expr:?}");
            assert_ne!(txt, "undefined", "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_determinisme() {
    let mut r1 = Rng::new(7);
    let mut r2 = Rng::new(7);

    for _ in 0..500 {
        let e1 = gen_bruit(&mut r1, 12);
        let e2 = gen_bruit(&mut r2, 12);
        assert_eq!(e1, e2);
        assert_eq!(eval_expression(&e1), eval_expression(&e2));
    }
}

#[test]
fn fuzz_profondeur_de_parentheses() {
    let n = 500;
    let expr = format!("{}1{}", " ( ".repeat(n), " ) ".repeat(n));
    assert_eq!(eval_expression(&expr).unwrap(), "1");

    let ouvert = format!("{}1{}", " ( ".repeat(n), " ) ".repeat(n - 1));
    assert!(eval_expression(&ouvert).is_err());
}
