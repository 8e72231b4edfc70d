//! Erreurs du noyau.
//!
//! Toutes ces erreurs restent internes : à la frontière de l’évaluateur, elles
//! sont réduites à `Resultat::Echec` (un seul marqueur affiché).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("fonction sans parenthèse ouvrante: {0}")]
    FonctionSansParenthese(String),

    #[error("% doit suivre un nombre")]
    PourcentSansNombre,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseSansOuvrante,

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("résultat non fini")]
    ResultatNonFini,
}
