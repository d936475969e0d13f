// src/noyau/analyse.rs
//
// Descente récursive SANS jetons : le curseur marche directement sur la
// chaîne et chaque règle de grammaire retourne sa valeur f64 (pas d'AST).
//
// Grammaire (binaires associatifs à gauche, signe unaire récursif à droite) :
//   expression := terme (('+' | '-') terme)*
//   terme      := facteur (('*' | '/' | '%') facteur)*
//   facteur    := ('+' | '-') facteur | '(' expression ')' | nombre
//   nombre     := suite maximale de chiffres et '.' -> f64::from_str
//
// Politiques assumées (verrouillées par tests) :
// - ')' manquante tolérée : on continue comme si elle avait été consommée.
// - division/modulo par zéro : sémantique IEEE (±inf, NaN), pas une erreur.

use super::erreur::ErreurAnalyse;

/* ------------------------ Curseur ------------------------ */

/// État transient d'une analyse : position + caractère courant.
/// Construit à chaque appel d'`evaluer`, jamais partagé, jamais réutilisé.
struct Curseur {
    cars: Vec<char>,
    pos: usize,
    car: Option<char>, // None = fin d'entrée
}

impl Curseur {
    fn nouveau(s: &str) -> Self {
        let cars: Vec<char> = s.chars().collect();
        let car = cars.first().copied();
        Self { cars, pos: 0, car }
    }

    fn avance(&mut self) {
        self.pos += 1;
        self.car = self.cars.get(self.pos).copied();
    }

    /// Saute les blancs puis consomme `attendu` s'il est là.
    fn mange(&mut self, attendu: char) -> bool {
        while matches!(self.car, Some(c) if c.is_whitespace()) {
            self.avance();
        }
        if self.car == Some(attendu) {
            self.avance();
            true
        } else {
            false
        }
    }

    /* ---- règles de grammaire (valeur calculée en ligne) ---- */

    fn expression(&mut self) -> Result<f64, ErreurAnalyse> {
        let mut x = self.terme()?;
        loop {
            if self.mange('+') {
                x += self.terme()?;
            } else if self.mange('-') {
                x -= self.terme()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn terme(&mut self) -> Result<f64, ErreurAnalyse> {
        let mut x = self.facteur()?;
        loop {
            if self.mange('*') {
                x *= self.facteur()?;
            } else if self.mange('/') {
                x /= self.facteur()?;
            } else if self.mange('%') {
                // reste flottant : le signe suit le dividende
                x %= self.facteur()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn facteur(&mut self) -> Result<f64, ErreurAnalyse> {
        // signe unaire : récursif à droite, empilable (--5 => 5)
        if self.mange('+') {
            return self.facteur();
        }
        if self.mange('-') {
            return Ok(-self.facteur()?);
        }

        if self.mange('(') {
            let x = self.expression()?;
            // ')' absente tolérée
            self.mange(')');
            return Ok(x);
        }

        self.nombre()
    }

    fn nombre(&mut self) -> Result<f64, ErreurAnalyse> {
        let debut = self.pos;
        while matches!(self.car, Some(c) if c.is_ascii_digit() || c == '.') {
            self.avance();
        }

        if self.pos == debut {
            // un facteur était attendu ici
            return Err(match self.car {
                Some(c) => ErreurAnalyse::CaractereInattendu {
                    car: c,
                    position: self.pos,
                },
                None => ErreurAnalyse::FinInattendue,
            });
        }

        let texte: String = self.cars[debut..self.pos].iter().collect();

        // "1.2.3" ou "." échouent ici — jamais de troncature silencieuse
        texte
            .parse::<f64>()
            .map_err(|_| ErreurAnalyse::NombreInvalide {
                texte,
                position: debut,
            })
    }
}

/* ------------------------ API ------------------------ */

/// Évalue une expression arithmétique en un seul passage.
///
/// Fonction pure : aucun état entre les appels, déterministe, temps linéaire
/// en la longueur de l'entrée. Les blancs sont ignorés pendant la lecture,
/// l'appelant n'a pas besoin de les retirer.
pub fn evaluer(entree: &str) -> Result<f64, ErreurAnalyse> {
    if entree.trim().is_empty() {
        return Err(ErreurAnalyse::EntreeVide);
    }

    let mut curseur = Curseur::nouveau(entree);
    let valeur = curseur.expression()?;

    // tout caractère restant est une erreur ("3 3" après avoir lu 3)
    if let Some(car) = curseur.car {
        return Err(ErreurAnalyse::ResteNonConsomme {
            car,
            position: curseur.pos,
        });
    }

    Ok(valeur)
}

#[cfg(test)]
mod tests {
    use super::super::erreur::ErreurAnalyse;
    use super::evaluer;

    fn ok(expr: &str) -> f64 {
        evaluer(expr).unwrap_or_else(|e| panic!("evaluer({expr:?}) erreur: {e}"))
    }

    // --- Grammaire de base ---

    #[test]
    fn addition_et_priorites() {
        assert_eq!(ok("3+4"), 7.0);
        assert_eq!(ok("2+3*4"), 14.0);
        assert_eq!(ok("2*(3+4)"), 14.0);
        assert_eq!(ok("3+4*(2-1)"), 7.0);
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(ok("8-3-2"), 3.0);
        assert_eq!(ok("16/4/2"), 2.0);
        assert_eq!(ok("10%7%2"), 1.0);
    }

    #[test]
    fn signe_unaire_empilable() {
        assert_eq!(ok("--5"), 5.0);
        assert_eq!(ok("-+-5"), 5.0);
        assert_eq!(ok("-(2+3)"), -5.0);
        assert_eq!(ok("3*-2"), -6.0);
    }

    #[test]
    fn nombres_decimaux() {
        assert_eq!(ok("5."), 5.0);
        assert_eq!(ok(".5"), 0.5);
        assert_eq!(ok("1.25+0.75"), 2.0);
    }

    #[test]
    fn blancs_ignores() {
        assert_eq!(ok(" 3 + 4 "), 7.0);
        assert_eq!(ok("2 * ( 3 + 4 )"), 14.0);
        assert_eq!(ok("\t1+\n2"), 3.0);
    }

    // --- Politiques assumées ---

    #[test]
    fn parenthese_fermante_absente_toleree() {
        // tolérance assumée, couverte en régression
        assert_eq!(ok("(1+2"), 3.0);
        assert_eq!(ok("((1+2"), 3.0);
        assert_eq!(ok("2*(3+4"), 14.0);
    }

    #[test]
    fn division_par_zero_ieee() {
        assert_eq!(ok("5/0"), f64::INFINITY);
        assert_eq!(ok("-5/0"), f64::NEG_INFINITY);
        assert!(ok("0/0").is_nan());
        assert!(ok("7%0").is_nan());
    }

    // --- Échecs ---

    #[test]
    fn entree_vide_ou_blanche() {
        assert_eq!(evaluer(""), Err(ErreurAnalyse::EntreeVide));
        assert_eq!(evaluer("   "), Err(ErreurAnalyse::EntreeVide));
    }

    #[test]
    fn reste_non_consomme() {
        assert_eq!(
            evaluer("3 3"),
            Err(ErreurAnalyse::ResteNonConsomme {
                car: '3',
                position: 2
            })
        );
        assert!(matches!(
            evaluer("1+2)"),
            Err(ErreurAnalyse::ResteNonConsomme { car: ')', .. })
        ));
    }

    #[test]
    fn operande_manquante() {
        assert_eq!(evaluer("3+"), Err(ErreurAnalyse::FinInattendue));
        assert!(matches!(
            evaluer("*3"),
            Err(ErreurAnalyse::CaractereInattendu { car: '*', .. })
        ));
        assert!(matches!(
            evaluer("3+*2"),
            Err(ErreurAnalyse::CaractereInattendu { car: '*', .. })
        ));
        assert!(matches!(
            evaluer("()"),
            Err(ErreurAnalyse::CaractereInattendu { car: ')', .. })
        ));
    }

    #[test]
    fn litteral_invalide() {
        assert!(matches!(
            evaluer("1.2.3"),
            Err(ErreurAnalyse::NombreInvalide { .. })
        ));
        assert!(matches!(
            evaluer("."),
            Err(ErreurAnalyse::NombreInvalide { .. })
        ));
    }

    #[test]
    fn caractere_inconnu() {
        assert!(matches!(
            evaluer("2^3"),
            Err(ErreurAnalyse::ResteNonConsomme { car: '^', .. })
        ));
        assert!(matches!(
            evaluer("abc"),
            Err(ErreurAnalyse::CaractereInattendu { car: 'a', .. })
        ));
    }
}
