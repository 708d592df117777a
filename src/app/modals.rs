//! Modal dialogs (duplicate letter warning)

use super::App;
use crate::theme;
use eframe::egui;

const DIALOG_WIDTH: f32 = 320.0;

impl App {
    /// Blocking warning shown when a target letter is already taken.
    /// Closes on OK, Escape, or a click on the backdrop.
    pub(crate) fn render_duplicate_warning(&mut self, ctx: &egui::Context) {
        let Some(warning) = &self.duplicate_warning else {
            return;
        };
        let message = warning.to_string();

        let modal_area = egui::Modal::default_area(egui::Id::new("duplicate_letter_modal"))
            .default_width(DIALOG_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("duplicate_letter_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut acknowledged = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(DIALOG_WIDTH);
            ui.set_max_width(DIALOG_WIDTH);

            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::WARNING)
                        .size(32.0)
                        .color(theme::STATUS_WARNING),
                );
                ui.add_space(theme::SPACING_SM);
                ui.label(egui::RichText::new("Duplicate Letter").size(theme::FONT_TITLE).strong());
                ui.add_space(theme::SPACING_MD);
                ui.label(egui::RichText::new(&message).color(theme::TEXT_MUTED));
                ui.add_space(theme::SPACING_LG);

                let ok_btn = ui.add(theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK)));
                if ok_btn.clicked() {
                    acknowledged = true;
                }
                ok_btn.request_focus();
            });
        });

        if acknowledged || modal_response.should_close() {
            self.dismiss_duplicate_warning();
        }
    }
}
