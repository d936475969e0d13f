// src/noyau/eval.rs
//
// Pipeline public : analyse -> format.

use log::debug;

use super::analyse::evaluer;
use super::erreur::ErreurAnalyse;
use super::format::formater;

/// API publique : évalue une expression et retourne son rendu d'affichage.
///
/// Toute violation de grammaire remonte en `ErreurAnalyse` ; l'appelant la
/// réduit à un unique jeton opaque, sans résultat partiel ni code d'erreur.
pub fn eval_expression(entree: &str) -> Result<String, ErreurAnalyse> {
    debug!("évaluation de {entree:?}");

    let valeur = evaluer(entree)?;
    let rendu = formater(valeur);

    debug!("résultat : {valeur} -> {rendu:?}");
    Ok(rendu)
}

#[cfg(test)]
mod tests {
    use super::eval_expression;
    use super::ErreurAnalyse;

    fn rendu(expr: &str) -> String {
        eval_expression(expr).unwrap_or_else(|e| panic!("eval_expression({expr:?}) erreur: {e}"))
    }

    #[test]
    fn rendu_entier() {
        assert_eq!(rendu("3+4"), "7");
        assert_eq!(rendu("7%2"), "1");
        assert_eq!(rendu("2*(3+4)"), "14");
    }

    #[test]
    fn rendu_decimal() {
        assert_eq!(rendu("10/4"), "2.5");
        assert_eq!(rendu("1/8"), "0.125");
    }

    #[test]
    fn rendu_valeurs_speciales() {
        assert_eq!(rendu("5/0"), "inf");
        assert_eq!(rendu("-5/0"), "-inf");
        assert_eq!(rendu("0/0"), "NaN");
    }

    #[test]
    fn echec_remonte_tel_quel() {
        assert_eq!(eval_expression(""), Err(ErreurAnalyse::EntreeVide));
        assert!(eval_expression("1.2.3").is_err());
    }
}
