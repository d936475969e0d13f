// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs saisis au vol, Enter/'=' évalue,
//   Backspace efface le dernier caractère, Delete efface tout
// - Grille 5x4 : C ⌫ % ÷ / 7 8 9 × / 4 5 6 − / 1 2 3 + / 00 0 . =
// - Thème sombre : opérateurs orange, pavé gris foncé
//
// Note :
// - La vue ne touche jamais le noyau directement, sauf au point unique
//   d'évaluation (evalue_via_noyau). Tout le reste passe par etat.rs.

use eframe::egui;
use log::debug;

use super::etat::AppCalc;

/* ------------------------ Palette ------------------------ */

const FOND_BOUTON: egui::Color32 = egui::Color32::from_rgb(44, 44, 46);
const FOND_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(255, 149, 0);
const FOND_AFFICHAGE: egui::Color32 = egui::Color32::from_rgb(36, 36, 38);
const COULEUR_TEXTE: egui::Color32 = egui::Color32::WHITE;

/// Taille d'un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [68.0, 48.0];

fn bouton(ui: &mut egui::Ui, label: &str, fond: egui::Color32) -> bool {
    ui.add_sized(
        TAILLE_BOUTON,
        egui::Button::new(
            egui::RichText::new(label)
                .size(18.0)
                .color(COULEUR_TEXTE),
        )
        .fill(fond),
    )
    .clicked()
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        // d'abord le clavier : une frame de latence en moins
        self.clavier(ui);

        ui.add_space(6.0);
        self.ui_affichage(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(FOND_AFFICHAGE)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(48.0);

                // texte aligné à droite, comme une calculatrice de poche
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = if self.affichage.is_empty() {
                        "0"
                    } else {
                        self.affichage.as_str()
                    };
                    ui.label(
                        egui::RichText::new(texte)
                            .monospace()
                            .size(32.0)
                            .color(COULEUR_TEXTE),
                    );
                });
            });
    }

    /* ------------------------ Pavé numérique ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                if bouton(ui, "C", FOND_BOUTON) {
                    self.efface_tout();
                }
                if bouton(ui, "⌫", FOND_BOUTON) {
                    self.efface_dernier();
                }
                if bouton(ui, "%", FOND_BOUTON) {
                    self.pousse_operateur('%');
                }
                if bouton(ui, "÷", FOND_OPERATEUR) {
                    self.pousse_operateur('/');
                }
                ui.end_row();

                if bouton(ui, "7", FOND_BOUTON) {
                    self.pousse_chiffre('7');
                }
                if bouton(ui, "8", FOND_BOUTON) {
                    self.pousse_chiffre('8');
                }
                if bouton(ui, "9", FOND_BOUTON) {
                    self.pousse_chiffre('9');
                }
                if bouton(ui, "×", FOND_OPERATEUR) {
                    self.pousse_operateur('*');
                }
                ui.end_row();

                if bouton(ui, "4", FOND_BOUTON) {
                    self.pousse_chiffre('4');
                }
                if bouton(ui, "5", FOND_BOUTON) {
                    self.pousse_chiffre('5');
                }
                if bouton(ui, "6", FOND_BOUTON) {
                    self.pousse_chiffre('6');
                }
                if bouton(ui, "−", FOND_OPERATEUR) {
                    self.pousse_operateur('-');
                }
                ui.end_row();

                if bouton(ui, "1", FOND_BOUTON) {
                    self.pousse_chiffre('1');
                }
                if bouton(ui, "2", FOND_BOUTON) {
                    self.pousse_chiffre('2');
                }
                if bouton(ui, "3", FOND_BOUTON) {
                    self.pousse_chiffre('3');
                }
                if bouton(ui, "+", FOND_OPERATEUR) {
                    self.pousse_operateur('+');
                }
                ui.end_row();

                if bouton(ui, "00", FOND_BOUTON) {
                    self.pousse_double_zero();
                }
                if bouton(ui, "0", FOND_BOUTON) {
                    self.pousse_chiffre('0');
                }
                if bouton(ui, ".", FOND_BOUTON) {
                    self.pousse_point();
                }
                if bouton(ui, "=", FOND_OPERATEUR) {
                    self.evalue_via_noyau();
                }
                ui.end_row();
            });
    }

    /* ------------------------ Clavier ------------------------ */

    /// Même logique que les boutons : chaque touche passe par etat.rs.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' => self.pousse_chiffre(c),
                            '.' | ',' => self.pousse_point(),
                            '+' | '-' | '*' | '/' | '%' => self.pousse_operateur(c),
                            '=' => self.evalue_via_noyau(),
                            _ => {} // touche non reconnue : ignorée
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.evalue_via_noyau(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.efface_dernier(),
                egui::Event::Key {
                    key: egui::Key::Delete,
                    pressed: true,
                    ..
                } => self.efface_tout(),
                _ => {}
            }
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue l'affichage via le noyau, puis dépose le rendu ou le jeton
    /// d'erreur. Point d'évaluation unique : "=" et Enter passent ici.
    fn evalue_via_noyau(&mut self) {
        match crate::noyau::eval_expression(&self.affichage) {
            Ok(rendu) => self.affiche_resultat(rendu),
            Err(e) => {
                // le détail reste en log ; l'écran ne montre que le jeton
                debug!("évaluation refusée : {e}");
                self.affiche_erreur();
            }
        }
    }
}
