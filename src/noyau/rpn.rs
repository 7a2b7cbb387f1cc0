// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant l’alternance
//   valeur / opérateur au passage
// - Puis évaluer la RPN en f64 (sémantique IEEE-754)
//
// Règles:
// - '+' / '-' en position d’opérande => préfixe unaire (PlusUnaire / MoinsUnaire),
//   priorité la plus haute, associatif à droite ("- - 3" = 3)
// - '*' '/' avant '+' '-' ; à priorité égale, de gauche à droite
// - pas de multiplication implicite : "2 (3)" et "(2)(3)" sont refusés

use super::erreur::ErreurExpression;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::PlusUnaire | Tok::MoinsUnaire => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(7), Plus, Num(3), Star, Num(2)]
///   rpn:    [Num(7), Num(3), Num(2), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurExpression> {
    if tokens.is_empty() {
        return Err(ErreurExpression::Vide);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une parenthèse fermée.
    // Sert à détecter les préfixes et les trous.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurExpression::ValeurInattendue);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurExpression::ValeurInattendue);
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurExpression::OperandeManquante(')'));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurExpression::ParentheseOrpheline),
                    }
                }
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // préfixe : rien à dépiler (il s’applique à ce qui suit)
                ops.push(if tok == Tok::Plus {
                    Tok::PlusUnaire
                } else {
                    Tok::MoinsUnaire
                });
            }

            Tok::Star | Tok::Slash if !prev_was_value => {
                return Err(ErreurExpression::OperandeManquante(tok.symbole()));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // binaires tous associatifs à gauche ; les préfixes (précédence 3) partent ici
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    if precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::PlusUnaire | Tok::MoinsUnaire => return Err(ErreurExpression::Invalide),
        }
    }

    if !prev_was_value {
        return Err(ErreurExpression::Incomplete);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurExpression::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN. Aucune erreur numérique : 5/0 = inf, 0/0 = NaN.
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, ErreurExpression> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(n) => st.push(*n),

            Tok::PlusUnaire | Tok::MoinsUnaire => {
                let x = st.pop().ok_or(ErreurExpression::Invalide)?;
                st.push(if *tok == Tok::MoinsUnaire { -x } else { x });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or(ErreurExpression::Invalide)?;
                let a = st.pop().ok_or(ErreurExpression::Invalide)?;

                st.push(match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    _ => a / b,
                });
            }

            Tok::LPar | Tok::RPar => return Err(ErreurExpression::Invalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurExpression::Invalide),
    }
}
