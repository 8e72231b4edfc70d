//! Propriétés de la saisie et de l’évaluateur (proptest).

use proptest::prelude::*;

use super::calculatrice::Calculatrice;
use super::eval::{evaluer, Resultat};
use super::saisie::Saisie;

fn chiffre() -> impl Strategy<Value = String> {
    (0u8..10).prop_map(|d| d.to_string())
}

fn operateur() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "×", "÷", "^"])
}

fn prefixe() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "sin(", "cos(", "tan(", "asin(", "acos(", "atan(", "log(", "√(", "π", "e",
    ])
}

proptest! {
    #[test]
    fn chiffres_concatenes_sans_operateur(chiffres in prop::collection::vec(chiffre(), 0..30)) {
        let mut s = Saisie::new();
        for c in &chiffres {
            s.ajouter(c);
        }
        prop_assert_eq!(s.texte(), chiffres.concat());
    }

    #[test]
    fn second_point_sans_effet(
        avant in prop::collection::vec(chiffre(), 0..6),
        apres in prop::collection::vec(chiffre(), 0..6),
    ) {
        let mut s = Saisie::new();
        for c in &avant {
            s.ajouter(c);
        }
        s.ajouter(".");
        for c in &apres {
            s.ajouter(c);
        }
        let une_fois = s.texte().to_string();
        s.ajouter(".");
        prop_assert_eq!(s.texte(), une_fois);
    }

    #[test]
    fn un_seul_signe_implicite(n in 1u32..100_000, p in prefixe()) {
        let mut s = Saisie::new();
        s.ajouter(&n.to_string());
        s.ajouter(p);
        prop_assert_eq!(s.texte().to_string(), format!("{n}×{p}"));
    }

    #[test]
    fn operateur_remplace_operateur(a in operateur(), b in operateur()) {
        let mut s = Saisie::new();
        s.ajouter("3");
        s.ajouter(a);
        s.ajouter(b);

        let attendu = if b == "-" && a != "-" {
            format!("3{a}-")
        } else {
            format!("3{b}")
        };
        prop_assert_eq!(s.texte().to_string(), attendu);
    }

    #[test]
    fn somme_d_entiers_exacte(a in -1_000_000i64..1_000_000, b in 0i64..1_000_000) {
        let r = evaluer(&format!("{a}+{b}"), 12);
        let attendu = (a + b).to_string();
        prop_assert_eq!(r.texte(), Some(attendu.as_str()));
    }

    #[test]
    fn enchainement_tampon_egal_resultat(a in 0u32..10_000, b in 1u32..10_000) {
        let mut c = Calculatrice::default();
        c.ajouter(&a.to_string());
        c.ajouter("÷");
        c.ajouter(&b.to_string());

        let ev = c.evaluer().unwrap();
        prop_assert!(!ev.echec);
        prop_assert_eq!(c.expression(), ev.texte_resultat.as_str());
        prop_assert_eq!(c.historique().len(), 1);
    }

    #[test]
    fn resultat_arrondi_a_12_decimales(a in 1u32..1000, b in 1u32..1000) {
        if let Resultat::Numerique { texte, .. } = evaluer(&format!("{a}÷{b}"), 12) {
            let decimales = texte.split('.').nth(1).map_or(0, str::len);
            prop_assert!(decimales <= 12, "{} a trop de décimales", texte);
        } else {
            prop_assert!(false, "{}÷{} en échec", a, b);
        }
    }
}
