//! Saisie : construction du tampon d’expression touche par touche.
//!
//! Contrats :
//! - Le tampon reste « localement sain » : jamais deux opérateurs binaires de
//!   suite (sauf un moins unaire juste après un opérateur), un seul '.' par
//!   nombre en cours, préfixes de fonction insérés d’un bloc.
//! - Une touche invalide est ignorée sans erreur (no-op).
//! - Aucune évaluation ici.

/// Opérateurs binaires affichés (les alias ASCII sont normalisés avant).
pub fn est_operateur_binaire(c: char) -> bool {
    matches!(c, '+' | '-' | '×' | '÷' | '^')
}

/// Opérateurs acceptés par `ajouter` : binaires + pourcentage.
pub fn est_operateur(c: char) -> bool {
    est_operateur_binaire(c) || c == '%'
}

/// Préfixe de fonction (`sin(`, `√(`, `(`) ou constante (`π`, `e`).
/// Un jeton qui commence par un opérateur ("×(") passe caractère par caractère.
fn est_fonction_ou_constante(jeton: &str) -> bool {
    match jeton.chars().next() {
        Some(c) => c.is_ascii_alphabetic() || c == 'π' || c == '√' || jeton == "(",
        None => false,
    }
}

fn normaliser(c: char) -> char {
    match c {
        '*' => '×',
        '/' => '÷',
        '−' => '-',
        _ => c,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    tampon: String,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texte(&self) -> &str {
        &self.tampon
    }

    pub fn is_empty(&self) -> bool {
        self.tampon.is_empty()
    }

    /// Réensemence le tampon (enchaînement après « = », rappel d’historique).
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.tampon = texte.into();
    }

    pub fn vider(&mut self) {
        self.tampon.clear();
    }

    /// Retire le dernier caractère (no-op si vide).
    pub fn supprimer_dernier(&mut self) {
        self.tampon.pop();
    }

    /// Ajoute une touche.
    ///
    /// - fonction/constante : '×' implicite si on suit un nombre ("5" + "sin(" => "5×sin(")
    /// - sinon, caractère par caractère ("+2" == "+" puis "2")
    pub fn ajouter(&mut self, jeton: &str) {
        if est_fonction_ou_constante(jeton) {
            if self
                .dernier()
                .is_some_and(|c| c.is_ascii_digit() || c == '.')
            {
                self.tampon.push('×');
            }
            self.tampon.push_str(jeton);
            return;
        }

        for c in jeton.chars() {
            self.ajouter_caractere(normaliser(c));
        }
    }

    fn dernier(&self) -> Option<char> {
        self.tampon.chars().next_back()
    }

    /// Nombre en cours de frappe : suffixe maximal de chiffres et de points.
    fn nombre_en_cours(&self) -> &str {
        let debut = self
            .tampon
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
            .last()
            .map_or(self.tampon.len(), |(i, _)| i);
        &self.tampon[debut..]
    }

    /// Vrai si le tampon finit par un '-' qui est un signe (début, après '(' ou
    /// après un opérateur binaire), et non une soustraction.
    fn finit_par_moins_unaire(&self) -> bool {
        let mut it = self.tampon.chars().rev();
        if it.next() != Some('-') {
            return false;
        }
        match it.next() {
            None | Some('(') => true,
            Some(c) => est_operateur_binaire(c),
        }
    }

    fn ajouter_caractere(&mut self, c: char) {
        if c == '.' {
            let courant = self.nombre_en_cours();
            if courant.contains('.') {
                return;
            }
            if courant.is_empty() {
                self.tampon.push('0');
            }
            self.tampon.push('.');
            return;
        }

        if !est_operateur(c) {
            self.tampon.push(c);
            return;
        }

        match self.dernier() {
            // début d’expression (ou de parenthèse) : seul le signe moins passe
            None | Some('(') => {
                if c == '-' {
                    self.tampon.push(c);
                }
            }

            Some('-') if self.finit_par_moins_unaire() => {
                // "5×-" + "-" : déjà négatif ; sinon on retire le signe et on rejoue
                if c != '-' {
                    self.tampon.pop();
                    self.ajouter_caractere(c);
                }
            }

            // '%' compte comme opérateur : "50%" + "+" => "50+"
            Some(d) if est_operateur(d) => {
                if c == '-' && d != '-' {
                    // "5×" + "-" => "5×-" (multiplier par un négatif)
                    self.tampon.push(c);
                } else {
                    self.tampon.pop();
                    self.tampon.push(c);
                }
            }

            Some(_) => self.tampon.push(c),
        }
    }
}
