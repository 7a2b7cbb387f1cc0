// src/noyau/format.rs
//
// Affichage d’un f64 “comme une calculatrice de navigateur”.
//
// Règles (k = nombre de chiffres significatifs, n = position de la virgule) :
// - k ≤ n ≤ 21        : entier, complété de zéros        (1e20 -> "100000000000000000000")
// - 0 < n ≤ 21        : virgule au milieu                (2.5)
// - -6 < n ≤ 0        : "0." + zéros + chiffres          (0.000001)
// - sinon             : notation exposant signée         (1e+21, 1e-7, 1.5e-10)
// - NaN / ±Infinity   : en toutes lettres
// - -0                : "0"

/// Texte d’un nombre. Chiffres = plus courte écriture qui relit le même f64.
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };

    // {:e} donne déjà la plus courte mantisse aller-retour : "3.0000000000000004e-1"
    let sci = format!("{:e}", x.abs());
    let Some((mantisse, exp)) = sci.split_once('e') else {
        return format!("{signe}{sci}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{signe}{sci}");
    };

    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    let k = chiffres.len() as i32;
    let n = exp + 1;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let signe_e = if e >= 0 { '+' } else { '-' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe_e}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe_e}{}", e.abs())
        }
    };

    format!("{signe}{corps}")
}
