// src/noyau/format.rs
//
// Rendu d'un résultat f64 pour l'affichage.
//
// Règle : une valeur qui survit à l'aller-retour par i64 s'affiche comme un
// entier (pas de ".0", pas de séparateurs de milliers) ; sinon on laisse le
// Display par défaut de f64 (représentation décimale la plus courte qui
// refait l'aller-retour). NaN et ±inf passent aussi par le Display par
// défaut : ce sont des résultats, pas des erreurs.

/// Formate une valeur pour l'affichage de la calculatrice.
///
/// Déterministe : même valeur, même chaîne.
pub fn formater(valeur: f64) -> String {
    // cast saturant : NaN s'élimine via NaN != NaN, ±inf ne refont pas
    // l'aller-retour
    if valeur == (valeur as i64) as f64 {
        return format!("{}", valeur as i64);
    }
    format!("{valeur}")
}

#[cfg(test)]
mod tests {
    use super::formater;

    #[test]
    fn entier_sans_partie_decimale() {
        assert_eq!(formater(7.0), "7");
        assert_eq!(formater(-3.0), "-3");
        assert_eq!(formater(0.0), "0");
        assert_eq!(formater(-0.0), "0");
        assert_eq!(formater(1e15), "1000000000000000");
    }

    #[test]
    fn decimal_en_display_par_defaut() {
        assert_eq!(formater(2.5), "2.5");
        assert_eq!(formater(-0.25), "-0.25");
        assert_eq!(formater(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn valeurs_speciales_formatees_pas_piegees() {
        assert_eq!(formater(f64::INFINITY), "inf");
        assert_eq!(formater(f64::NEG_INFINITY), "-inf");
        assert_eq!(formater(f64::NAN), "NaN");
    }

    #[test]
    fn idempotence() {
        for v in [7.0, 2.5, f64::NAN, f64::INFINITY, -0.0, 1e300] {
            assert_eq!(formater(v), formater(v));
        }
    }
}
