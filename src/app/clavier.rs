//! src/app/clavier.rs
//!
//! Clavier physique -> commandes de la calculatrice.
//! Pur (sans egui) pour rester testable ; app.rs lit les événements et appelle ceci.

/// Ce qu’une touche (ou un bouton) demande au noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Jeton(&'static str),
    Egal,
    Effacer,
    Supprimer,
}

/// Caractère tapé -> commande. `*` et `/` deviennent × et ÷ ; le reste est ignoré.
///
/// Les noms de fonctions ne se tapent pas lettre à lettre : ils passent par le
/// panneau scientifique.
pub fn commande_texte(c: char) -> Option<Commande> {
    let j = match c {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '.' => ".",
        '+' => "+",
        '-' => "-",
        '*' => "×",
        '/' => "÷",
        '%' => "%",
        '^' => "^",
        '(' => "(",
        ')' => ")",
        '=' => return Some(Commande::Egal),
        _ => return None,
    };
    Some(Commande::Jeton(j))
}
