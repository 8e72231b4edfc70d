// src/noyau/format.rs

/// Précision par défaut (décimales conservées après arrondi).
pub const DECIMALES_DEFAUT: u32 = 12;

/// Garde-fou : au-delà, 10^d * v perd toute précision utile en f64.
pub const DECIMALES_MAX: u32 = 15;

/// Arrondi à `decimales` chiffres après la virgule, pour effacer le bruit binaire
/// (0.1 + 0.2 => 0.3).
///
/// Sémantique « Math.round » : demi-entier arrondi vers +∞ (-2.5 => -2), après
/// ajout de f64::EPSILON. `-0` est ramené à `0`.
pub fn arrondir(valeur: f64, decimales: u32) -> f64 {
    let facteur = 10f64.powi(decimales.min(DECIMALES_MAX) as i32);
    let x = (valeur + f64::EPSILON) * facteur;

    // débordement du produit : la valeur n’a de toute façon plus de décimales
    if !x.is_finite() {
        return valeur;
    }

    let mut r = x.round();
    if x < 0.0 && r - x == -0.5 {
        r += 1.0;
    }

    let out = r / facteur;
    if out == 0.0 {
        0.0
    } else {
        out
    }
}

/// Forme décimale la plus courte qui relit exactement la valeur (jamais d’exposant).
pub fn format_nombre(valeur: f64) -> String {
    format!("{valeur}")
}
