//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'affichage de la calculatrice (une seule chaîne possédée)
//! et offrir les règles de saisie : anti-empilement d'opérateurs,
//! jeton d'erreur opaque, effacements.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas d'analyse).
//! - Actions déterministes, sans effet de bord caché.
//! - Le jeton d'erreur est effacé avant toute nouvelle saisie.

/// Jeton opaque affiché quand l'évaluation échoue.
/// L'appelant ne voit jamais le détail d'une `ErreurAnalyse`.
pub const JETON_ERREUR: &str = "Erreur";

/// Opérateurs binaires acceptés par la saisie.
const OPERATEURS: &str = "+-*/%";

fn est_operateur(c: char) -> bool {
    OPERATEURS.contains(c)
}

/// État complet de la calculatrice : une seule chaîne possédée, qui tient
/// l'expression en cours, le dernier résultat, ou le jeton d'erreur.
#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub affichage: String,
}

impl AppCalc {
    /* ------------------------ Saisie ------------------------ */

    /// Si le jeton d'erreur est affiché, on repart d'un écran vide.
    pub fn efface_si_erreur(&mut self) {
        if self.affichage == JETON_ERREUR {
            self.affichage.clear();
        }
    }

    pub fn pousse_chiffre(&mut self, chiffre: char) {
        debug_assert!(chiffre.is_ascii_digit());
        self.efface_si_erreur();
        self.affichage.push(chiffre);
    }

    /// Touche "00" : deux zéros d'un coup.
    pub fn pousse_double_zero(&mut self) {
        self.efface_si_erreur();
        self.affichage.push_str("00");
    }

    /// Ajoute '.' tel quel : pas de garde ici, le noyau rejettera "1.2.3"
    /// à l'évaluation.
    pub fn pousse_point(&mut self) {
        self.efface_si_erreur();
        self.affichage.push('.');
    }

    /// Règles anti-empilement :
    /// - affichage vide : seul '-' est accepté (nombre négatif) ;
    /// - affichage exactement "-" : aucun opérateur ne l'écrase ;
    /// - dernier caractère déjà opérateur : on le remplace ;
    /// - sinon : on ajoute.
    pub fn pousse_operateur(&mut self, op: char) {
        debug_assert!(est_operateur(op));
        self.efface_si_erreur();

        if self.affichage.is_empty() {
            if op == '-' {
                self.affichage.push(op);
            }
            return;
        }

        if self.affichage == "-" {
            return;
        }

        if self.affichage.ends_with(est_operateur) {
            self.affichage.pop();
        }
        self.affichage.push(op);
    }

    /* ------------------------ Effacements ------------------------ */

    /// ⌫ : retire le dernier caractère.
    /// No-op quand le jeton d'erreur est affiché (il faut C ou une
    /// nouvelle saisie pour en sortir).
    pub fn efface_dernier(&mut self) {
        if self.affichage != JETON_ERREUR {
            self.affichage.pop();
        }
    }

    /// C : remise à zéro de l'affichage.
    pub fn efface_tout(&mut self) {
        self.affichage.clear();
    }

    /* ------------------------ Résultats ------------------------ */

    /// Dépose un rendu du noyau (remplace l'affichage).
    pub fn affiche_resultat(&mut self, rendu: String) {
        self.affichage = rendu;
    }

    /// Dépose le jeton d'erreur opaque (l'entrée fautive est perdue).
    pub fn affiche_erreur(&mut self) {
        self.affichage = JETON_ERREUR.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCalc, JETON_ERREUR};

    fn avec(affichage: &str) -> AppCalc {
        AppCalc {
            affichage: affichage.to_string(),
        }
    }

    // --- Anti-empilement d'opérateurs ---

    #[test]
    fn operateur_sur_vide_seul_moins_passe() {
        let mut app = avec("");
        app.pousse_operateur('+');
        assert_eq!(app.affichage, "");

        app.pousse_operateur('-');
        assert_eq!(app.affichage, "-");
    }

    #[test]
    fn moins_initial_verrouille() {
        let mut app = avec("-");
        for op in ['+', '*', '/', '%', '-'] {
            app.pousse_operateur(op);
            assert_eq!(app.affichage, "-");
        }
    }

    #[test]
    fn operateur_final_remplace() {
        let mut app = avec("3+");
        app.pousse_operateur('*');
        assert_eq!(app.affichage, "3*");
    }

    #[test]
    fn operateur_apres_nombre_ajoute() {
        let mut app = avec("12");
        app.pousse_operateur('%');
        assert_eq!(app.affichage, "12%");
    }

    // --- Jeton d'erreur ---

    #[test]
    fn saisie_efface_le_jeton_erreur() {
        let mut app = avec("");
        app.affiche_erreur();
        assert_eq!(app.affichage, JETON_ERREUR);

        app.pousse_chiffre('5');
        assert_eq!(app.affichage, "5");
    }

    #[test]
    fn operateur_efface_le_jeton_erreur() {
        let mut app = avec("");
        app.affiche_erreur();
        app.pousse_operateur('-');
        assert_eq!(app.affichage, "-");
    }

    #[test]
    fn backspace_no_op_sur_erreur() {
        let mut app = avec("");
        app.affiche_erreur();
        app.efface_dernier();
        assert_eq!(app.affichage, JETON_ERREUR);
    }

    // --- Effacements / divers ---

    #[test]
    fn backspace_et_clear() {
        let mut app = avec("3+4");
        app.efface_dernier();
        assert_eq!(app.affichage, "3+");

        app.efface_tout();
        assert_eq!(app.affichage, "");

        // backspace sur vide : no-op
        app.efface_dernier();
        assert_eq!(app.affichage, "");
    }

    #[test]
    fn double_zero() {
        let mut app = avec("5");
        app.pousse_double_zero();
        assert_eq!(app.affichage, "500");
    }

    #[test]
    fn resultat_remplace_affichage() {
        let mut app = avec("3+4");
        app.affiche_resultat("7".to_string());
        assert_eq!(app.affichage, "7");
    }
}
