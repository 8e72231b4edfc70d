//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler saisie + « = » comme un utilisateur pressé, sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de session bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais deux opérateurs binaires de suite (sauf "op" puis '-')
//!   * un seul '.' par nombre
//!   * succès => tampon == résultat ; échec => tampon intact
//!   * une entrée d’historique par « = » sur tampon non vide

use std::time::{Duration, Instant};

use super::calculatrice::Calculatrice;
use super::saisie::est_operateur_binaire;

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

/* ------------------------ Touches ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Touche {
    Jeton(&'static str),
    Egal,
    Del,
    Ac,
}

const JETONS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "%", "^", "(",
    ")", "sin(", "cos(", "tan(", "asin(", "acos(", "atan(", "log(", "√(", "π", "e",
];

fn gen_touche(rng: &mut Rng) -> Touche {
    // chiffres et opérateurs surreprésentés, actions plus rares
    match rng.pick(40) {
        0..=3 => Touche::Egal,
        4 | 5 => Touche::Del,
        6 => Touche::Ac,
        7..=16 => Touche::Jeton(JETONS[rng.pick(10) as usize]),
        _ => Touche::Jeton(JETONS[rng.pick(JETONS.len() as u32) as usize]),
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_invariants_tampon(t: &str) {
    let chars: Vec<char> = t.chars().collect();

    for w in chars.windows(2) {
        if est_operateur_binaire(w[0]) && est_operateur_binaire(w[1]) {
            assert!(
                w[1] == '-' && w[0] != '-',
                "deux opérateurs de suite dans {t:?}"
            );
        }
    }
    for w in chars.windows(3) {
        assert!(
            !w.iter().all(|c| est_operateur_binaire(*c)),
            "trois opérateurs de suite dans {t:?}"
        );
    }

    if let Some(&c) = chars.first() {
        if est_operateur_binaire(c) {
            assert_eq!(c, '-', "opérateur en tête de {t:?}");
        }
    }

    for nombre in t.split(|c: char| !(c.is_ascii_digit() || c == '.')) {
        assert!(
            nombre.matches('.').count() <= 1,
            "deux points dans le nombre {nombre:?} de {t:?}"
        );
    }
}

/// Joue une session ; rend l’historique (expression, résultat) pour comparer.
fn session(seed: u64, n: usize, t0: Instant, max: Duration) -> Vec<(String, String)> {
    let mut rng = Rng::new(seed);
    let mut c = Calculatrice::default();

    for _ in 0..n {
        budget(t0, max);

        match gen_touche(&mut rng) {
            Touche::Jeton(j) => c.ajouter(j),
            Touche::Del => c.supprimer_dernier(),
            Touche::Ac => c.effacer_tout(),
            Touche::Egal => {
                let avant = c.expression().to_string();
                let nb_avant = c.historique().len();

                match c.evaluer() {
                    None => {
                        assert!(avant.trim().is_empty());
                        assert_eq!(c.historique().len(), nb_avant);
                    }
                    Some(ev) => {
                        assert_eq!(c.historique().len(), nb_avant + 1);
                        if ev.echec {
                            assert_eq!(c.expression(), avant);
                        } else {
                            assert_eq!(c.expression(), ev.texte_resultat);
                            assert!(ev.texte_resultat.parse::<f64>().is_ok());
                        }
                    }
                }
            }
        }

        check_invariants_tampon(c.expression());
    }

    c.historique()
        .entrees()
        .map(|e| (e.expression_source.clone(), e.resultat.clone()))
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_saisie() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for seed in 0..40u64 {
        for (_, res) in session(0xC0FFEE_u64 ^ seed, 300, t0, max) {
            if res.parse::<f64>().is_ok() {
                seen_ok += 1;
            } else {
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’échecs: {seen_err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes touches => même historique
    let a = session(0xBADC0DE_u64, 400, t0, max);
    let b = session(0xBADC0DE_u64, 400, t0, max);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_texte_arbitraire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Texte brut (hors saisie) : l’évaluateur ne doit jamais paniquer.
    let alphabet: Vec<char> = "0123456789.+-×÷*/%^()πe√sincotalgx ".chars().collect();
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..2_000 {
        budget(t0, max);

        let len = 1 + rng.pick(24) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();

        if let Some(t) = super::eval::evaluer(&s, 12).texte() {
            assert!(t.parse::<f64>().is_ok(), "texte non numérique {t:?} pour {s:?}");
        }
    }
}
