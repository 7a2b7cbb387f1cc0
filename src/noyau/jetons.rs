// src/noyau/jetons.rs

use super::erreur::ErreurExpression;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // Préfixes (posés par to_rpn, jamais par tokenize)
    PlusUnaire,
    MoinsUnaire,

    LPar,
    RPar,
}

impl Tok {
    /// Symbole source (sert aux messages d’erreur).
    pub fn symbole(&self) -> char {
        match self {
            Tok::Num(_) => '#',
            Tok::Plus | Tok::PlusUnaire => '+',
            Tok::Minus | Tok::MoinsUnaire => '-',
            Tok::Star => '*',
            Tok::Slash => '/',
            Tok::LPar => '(',
            Tok::RPar => ')',
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux : suite maximale de chiffres et de '.' (ex: 12, 0.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (séparateurs, ignorés)
///
/// Refuse "++" / "--" collés : ce ne sont pas deux opérateurs arithmétiques.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };

        if let Some(t) = tok {
            if matches!(t, Tok::Plus | Tok::Minus) && chars.get(i + 1) == Some(&c) {
                return Err(ErreurExpression::OperateurDouble(c));
            }
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres et points, interprétés en base 10 (zéros de tête ignorés)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let brut: String = chars[start..i].iter().collect();
            let n = brut
                .parse::<f64>()
                .map_err(|_| ErreurExpression::NombreInvalide(brut.clone()))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(ErreurExpression::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => super::format::format_nombre(*n),
            Tok::PlusUnaire => "u+".to_string(),
            Tok::MoinsUnaire => "u-".to_string(),
            autre => autre.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
