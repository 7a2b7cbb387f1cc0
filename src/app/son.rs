// src/app/son.rs
//
// Bips (Web Audio) — natif + web
// ------------------------------
// - Web  : synthèse par oscillateurs, aucun fichier son
// - Natif: silencieux (pas de sortie audio embarquée)
//
// Contrat: fire-and-forget. Jamais de panique, jamais d’erreur remontée ;
// un navigateur sans AudioContext donne simplement… rien.

use std::rc::Rc;

pub trait Son {
    /// “Tic” discret à chaque touche.
    fn jouer_clic(&self);
    /// Carillon deux tons à la libération du résultat.
    fn jouer_succes(&self);
}

/// Aucun son (natif, tests).
#[derive(Clone, Copy, Debug, Default)]
pub struct SonMuet;

impl Son for SonMuet {
    fn jouer_clic(&self) {}
    fn jouer_succes(&self) {}
}

/// Son adapté à la plateforme courante.
pub fn son_plateforme() -> Rc<dyn Son> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(web::SonWeb::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("audio indisponible en natif: bips désactivés");
        Rc::new(SonMuet)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::JsValue;
    use web_sys::{AudioContext, OscillatorType};

    use super::Son;

    /// Une note : forme, glissando de fréquence, enveloppe de gain.
    struct Note {
        forme: OscillatorType,
        debut: f64,
        duree: f64,
        freq: (f32, f32),
        freq_lineaire: bool,
        gain: (f32, f32),
    }

    fn jouer(ctx: &AudioContext, n: &Note) -> Result<(), JsValue> {
        let t = ctx.current_time() + n.debut;

        let osc = ctx.create_oscillator()?;
        let gain = ctx.create_gain()?;

        osc.set_type(n.forme);
        let f = osc.frequency();
        f.set_value_at_time(n.freq.0, t)?;
        if n.freq_lineaire {
            f.linear_ramp_to_value_at_time(n.freq.1, t + 0.1)?;
        } else {
            f.exponential_ramp_to_value_at_time(n.freq.1, t + n.duree.min(0.1))?;
        }

        let g = gain.gain();
        g.set_value_at_time(n.gain.0, t)?;
        g.exponential_ramp_to_value_at_time(n.gain.1, t + n.duree)?;

        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        osc.start_with_when(t)?;
        osc.stop_with_when(t + n.duree)?;
        Ok(())
    }

    /// Un seul AudioContext pour toute la page, créé au premier son.
    #[derive(Default)]
    pub struct SonWeb {
        ctx: RefCell<Option<AudioContext>>,
    }

    impl SonWeb {
        fn contexte(&self) -> Result<AudioContext, JsValue> {
            let mut slot = self.ctx.borrow_mut();
            if let Some(ctx) = slot.as_ref() {
                return Ok(ctx.clone());
            }
            let ctx = AudioContext::new()?;
            *slot = Some(ctx.clone());
            Ok(ctx)
        }

        fn jouer_notes(&self, notes: &[Note]) -> Result<(), JsValue> {
            let ctx = self.contexte()?;
            for n in notes {
                jouer(&ctx, n)?;
            }
            Ok(())
        }
    }

    impl Son for SonWeb {
        fn jouer_clic(&self) {
            let clic = Note {
                forme: OscillatorType::Sine,
                debut: 0.0,
                duree: 0.05,
                freq: (800.0, 300.0),
                freq_lineaire: false,
                gain: (0.05, 0.001),
            };
            if let Err(e) = self.jouer_notes(&[clic]) {
                tracing::debug!(?e, "clic muet");
            }
        }

        fn jouer_succes(&self) {
            // "Ding" aigu puis, 100 ms plus tard, le tiroir-caisse.
            let notes = [
                Note {
                    forme: OscillatorType::Sine,
                    debut: 0.0,
                    duree: 0.5,
                    freq: (1200.0, 2000.0),
                    freq_lineaire: false,
                    gain: (0.1, 0.01),
                },
                Note {
                    forme: OscillatorType::Triangle,
                    debut: 0.1,
                    duree: 0.4,
                    freq: (600.0, 800.0),
                    freq_lineaire: true,
                    gain: (0.1, 0.01),
                },
            ];
            if let Err(e) = self.jouer_notes(&notes) {
                tracing::debug!(?e, "carillon muet");
            }
        }
    }
}
