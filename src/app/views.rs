//! View rendering (input row, letter bank, letter grid, frequency summary)

use super::{App, FocusTarget};
use crate::constants::MAX_GRID_COLUMNS;
use crate::theme;
use crate::types::Glyph;
use crate::ui::components::{letter_box, literal_glyph, single_letter_input};
use crate::ui::layout::GridLayout;
use crate::utils::{frequency_line, letter_bank_text};
use eframe::egui;

impl App {
    // ========================================================================
    // INPUT ROW
    // ========================================================================

    pub(crate) fn render_controls(&mut self, ui: &mut egui::Ui) {
        let from_id = egui::Id::new("substitute_from");
        let to_id = egui::Id::new("substitute_to");

        if let Some(target) = self.pending_focus.take() {
            let id = match target {
                FocusTarget::From => from_id,
                FocusTarget::To => to_id,
            };
            ui.memory_mut(|mem| mem.request_focus(id));
        }

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Substitute:").size(theme::FONT_BODY));

            let from = single_letter_input(ui, from_id, &mut self.from_input);
            // Typing the source letter moves straight on to the target
            if from.changed() && !self.from_input.is_empty() {
                self.pending_focus = Some(FocusTarget::To);
            }

            ui.label(egui::RichText::new(egui_phosphor::regular::ARROW_RIGHT).color(theme::TEXT_DIM));

            let to = single_letter_input(ui, to_id, &mut self.to_input);
            let submitted = to.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let apply = ui.add(theme::button_accent(format!(
                "{}  Apply",
                egui_phosphor::regular::CHECK
            )));
            if apply.clicked() || submitted {
                self.apply_substitution();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.render_view_options(ui);
            });
        });
    }

    fn render_view_options(&mut self, ui: &mut egui::Ui) {
        let freq_label = if self.show_frequencies {
            format!("{}  Hide counts", egui_phosphor::regular::EYE_SLASH)
        } else {
            format!("{}  Show counts", egui_phosphor::regular::EYE)
        };
        if ui.add(theme::button(freq_label)).clicked() {
            self.show_frequencies = !self.show_frequencies;
        }

        let mut columns = self.grid_columns;
        let changed = ui
            .add(egui::DragValue::new(&mut columns).range(1..=MAX_GRID_COLUMNS))
            .changed();
        ui.label(egui::RichText::new("Words per row").color(theme::TEXT_MUTED));
        if changed {
            self.set_grid_columns(columns);
        }
    }

    // ========================================================================
    // LETTER BANK
    // ========================================================================

    pub(crate) fn render_letter_bank(&self, ui: &mut egui::Ui) {
        let used = self.model.used_plaintext_letters();
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(letter_bank_text(&used))
                    .monospace()
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    }

    // ========================================================================
    // LETTER GRID
    // ========================================================================

    pub(crate) fn render_grid(&mut self, ui: &mut egui::Ui) {
        let decoded = self.model.decode();
        let mut hovered = None;
        let mut clicked = None;

        for row in self.layout.rows() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::BOX_GAP;
                for &word_idx in row {
                    let glyphs = &self.model.ciphertext().words()[word_idx];
                    let mut cells = decoded[word_idx].iter();
                    let mut position = 0;

                    for glyph in glyphs {
                        match glyph {
                            Glyph::Cipher(_) => {
                                let Some(&cell) = cells.next() else { break };
                                let highlighted = self.hovered_cipher == Some(cell.cipher);
                                let id = GridLayout::box_id(word_idx, position);
                                let response = letter_box(ui, id, cell, highlighted);
                                if response.hovered() {
                                    hovered = Some(cell.cipher);
                                }
                                if response.clicked() {
                                    clicked = Some(cell.cipher);
                                }
                                position += 1;
                            }
                            Glyph::Literal(c) => literal_glyph(ui, *c),
                        }
                    }
                    ui.add_space(theme::WORD_GAP);
                }
            });
            ui.add_space(theme::SPACING_MD);
        }

        self.hovered_cipher = hovered;
        if let Some(cipher) = clicked {
            self.select_cipher(cipher);
        }
    }

    // ========================================================================
    // FREQUENCY & STATUS
    // ========================================================================

    pub(crate) fn render_frequency_line(&self, ui: &mut egui::Ui) {
        if !self.show_frequencies {
            return;
        }
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new("Frequency").strong().color(theme::TEXT_MUTED));
            ui.label(
                egui::RichText::new(frequency_line(self.model.frequency_table()))
                    .monospace()
                    .size(theme::FONT_SMALL + 1.0)
                    .color(theme::TEXT_SECONDARY),
            );
        });
    }

    pub(crate) fn render_status(&self, ui: &mut egui::Ui) {
        let mapped = self.model.mapped_count();
        let total = self.model.distinct_letter_count();
        ui.horizontal(|ui| {
            if self.model.is_solved() {
                ui.label(
                    egui::RichText::new(format!("{}  All letters mapped", egui_phosphor::regular::CHECK_CIRCLE))
                        .color(theme::STATUS_SUCCESS),
                );
            } else {
                ui.label(
                    egui::RichText::new(format!("{} of {} letters mapped", mapped, total))
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                );
            }
        });
    }
}
