// src/noyau/erreur.rs

use thiserror::Error;

/// Unique type d'échec du noyau.
///
/// Toute violation de grammaire, littéral numérique invalide ou reste non
/// consommé finit dans une de ces variantes ; l'appelant les réduit toutes
/// au même jeton opaque.
///
/// Les valeurs flottantes spéciales (NaN, ±inf) ne sont PAS des erreurs :
/// elles sortent comme résultat numérique normal.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurAnalyse {
    #[error("entrée vide")]
    EntreeVide,

    #[error("caractère inattendu '{car}' (position {position})")]
    CaractereInattendu { car: char, position: usize },

    #[error("fin d'entrée inattendue : opérande manquante")]
    FinInattendue,

    #[error("nombre invalide {texte:?} (position {position})")]
    NombreInvalide { texte: String, position: usize },

    #[error("reste non consommé à partir de '{car}' (position {position})")]
    ResteNonConsomme { car: char, position: usize },
}
