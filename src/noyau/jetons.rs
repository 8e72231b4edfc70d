// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Fonctions unaires reconnues (toujours suivies de '(').
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log10,
}

impl Fonction {
    /// Nom (minuscules) -> fonction. `log` est le logarithme décimal.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "sqrt" => Some(Fonction::Racine),
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "asin" => Some(Fonction::Asin),
            "acos" => Some(Fonction::Acos),
            "atan" => Some(Fonction::Atan),
            "log" => Some(Fonction::Log10),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "√",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Log10 => "log",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E,

    Fonction(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire : produit par to_rpn seulement (jamais par tokenize)
    Neg,

    LPar,
    RPar,
}

/// Tokenize le texte affiché en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5, 5., 1e-3)
/// - pourcentage postfixé sur un littéral simple (ex: 50% -> Num(0.5), pas 5.% ni 1e3%)
/// - opérateurs + - × ÷ ^ (et les alias ASCII * /, le signe − U+2212)
/// - parenthèses ( )
/// - π ou pi, e (mot isolé seulement)
/// - fonctions sin/cos/tan/asin/acos/atan/log (insensibles à la casse) et √,
///   immédiatement suivies de '('
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // Position juste après le dernier littéral numérique : '%' n’est valide qu’ici.
    let mut fin_litteral: Option<usize> = None;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Pourcentage : seulement collé à un littéral (pas après une parenthèse)
        if c == '%' {
            if fin_litteral != Some(i) {
                return Err(ErreurCalcul::PourcentSansNombre);
            }
            match out.last_mut() {
                Some(Tok::Num(v)) => *v /= 100.0,
                _ => return Err(ErreurCalcul::PourcentSansNombre),
            }
            fin_litteral = None;
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        if c == 'π' {
            out.push(Tok::Pi);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √ doit être collée à '('
        if c == '√' {
            if chars.get(i + 1) != Some(&'(') {
                return Err(ErreurCalcul::FonctionSansParenthese("√".into()));
            }
            out.push(Tok::Fonction(Fonction::Racine));
            i += 1;
            continue;
        }

        // Mots : constantes ou fonctions (un mot entier, donc "e" ne mord pas sur "sec")
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            match w.as_str() {
                "pi" => out.push(Tok::Pi),
                "e" => out.push(Tok::E),
                _ => {
                    let f = Fonction::depuis_nom(&w)
                        .ok_or(ErreurCalcul::FonctionInconnue(word))?;
                    if chars.get(i) != Some(&'(') {
                        return Err(ErreurCalcul::FonctionSansParenthese(w));
                    }
                    out.push(Tok::Fonction(f));
                }
            }
            continue;
        }

        // Nombre décimal, exposant optionnel (les résultats enchaînés peuvent en porter)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    while j < chars.len() && chars[j].is_ascii_digit() {
                        j += 1;
                    }
                    i = j;
                }
            }

            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(txt.clone()))?;

            out.push(Tok::Num(v));
            // '%' : seulement sur un littéral simple (12 ou 1.5, pas .5, 5. ni 1e3)
            if est_litteral_simple(&txt) {
                fin_litteral = Some(i);
            }
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    Ok(out)
}

/// Chiffres, éventuellement suivis d’un point et d’au moins un chiffre.
fn est_litteral_simple(txt: &str) -> bool {
    let mut parties = txt.splitn(2, '.');
    let entiere = parties.next().unwrap_or("");
    let chiffres = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    chiffres(entiere) && parties.next().map_or(true, chiffres)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Fonction(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
