//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur et tailles bornées
//! - budget temps global
//! - invariant clé : une chaîne produite par la grammaire s'évalue toujours
//!   en Ok (±inf / NaN compris) ; une soupe de caractères quelconque donne
//!   Ok ou ErreurAnalyse, jamais une panique

use std::time::{Duration, Instant};

use super::eval_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    match rng.pick(4) {
        // "5." et ".5" font partie de la grammaire
        0 => format!("{entier}."),
        1 => format!(".{entier}"),
        2 => format!("{}.{}", entier, rng.pick(100)),
        _ => format!("{entier}"),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, depth - 1)),
        2 => format!("-{}", gen_expr(rng, depth - 1)),
        3 => format!("+{}", gen_expr(rng, depth - 1)),
        4 => format!("{}+{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("{}-({})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        6 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        _ => {
            // division/modulo : zéro possible au dénominateur, c'est voulu
            // (±inf / NaN doivent rester des résultats Ok)
            let op = if rng.coin() { '/' } else { '%' };
            format!("{}{}{}", gen_expr(rng, depth - 1), op, gen_expr(rng, depth - 1))
        }
    }
}

fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789..++--**//%%(() ";
    (0..longueur)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char)
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_grammaire_valide_toujours_ok() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        let premier = eval_expression(&expr);
        assert!(
            premier.is_ok(),
            "chaîne de grammaire refusée: expr={expr:?} err={:?}",
            premier
        );

        // déterminisme : rejouer la même entrée redonne le même rendu
        assert_eq!(premier, eval_expression(&expr), "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_soupe_de_caracteres_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        // longueur bornée : profondeur de parenthèses bornée aussi
        let longueur = 1 + rng.pick(24) as usize;
        let soupe = gen_soupe(&mut rng, longueur);

        // Ok ou ErreurAnalyse, jamais de panique
        match eval_expression(&soupe) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d'erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1", 800);
    budget(t0, max);

    let rendu = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(rendu, "800");
}
