//! Reusable UI components
//!
//! Standalone widgets for the letter grid and the substitution inputs.

use crate::theme;
use crate::types::DecodedCell;
use eframe::egui;

/// Render one letter position: the solved letter (or placeholder) in a box,
/// with the cipher letter underneath in a smaller font.
pub fn letter_box(ui: &mut egui::Ui, id: egui::Id, cell: DecodedCell, highlighted: bool) -> egui::Response {
    let size = egui::vec2(theme::BOX_WIDTH, theme::BOX_HEIGHT + theme::CIPHER_ROW_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let box_rect = egui::Rect::from_min_size(rect.min, egui::vec2(theme::BOX_WIDTH, theme::BOX_HEIGHT));

        painter.rect_filled(box_rect, theme::RADIUS_SMALL, theme::letter_box_fill(response.hovered()));
        let stroke_color = if highlighted { theme::ACCENT } else { theme::BORDER_DEFAULT };
        painter.rect_stroke(
            box_rect,
            theme::RADIUS_SMALL,
            egui::Stroke::new(theme::STROKE_MEDIUM, stroke_color),
            egui::StrokeKind::Inside,
        );

        let solved_color = if cell.plain.is_some() { theme::ACCENT } else { theme::TEXT_DIM };
        painter.text(
            box_rect.center(),
            egui::Align2::CENTER_CENTER,
            cell.display_char(),
            egui::FontId::monospace(theme::FONT_SOLVED),
            solved_color,
        );
        painter.text(
            egui::pos2(box_rect.center().x, box_rect.bottom() + theme::CIPHER_ROW_HEIGHT / 2.0),
            egui::Align2::CENTER_CENTER,
            cell.cipher,
            egui::FontId::monospace(theme::FONT_CIPHER),
            theme::TEXT_MUTED,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Punctuation inside a word: no box, aligned with the solved row
pub fn literal_glyph(ui: &mut egui::Ui, c: char) {
    let width = theme::BOX_WIDTH / 2.0;
    let size = egui::vec2(width, theme::BOX_HEIGHT + theme::CIPHER_ROW_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().text(
        egui::pos2(rect.center().x, rect.min.y + theme::BOX_HEIGHT / 2.0),
        egui::Align2::CENTER_CENTER,
        c,
        egui::FontId::monospace(theme::FONT_SOLVED),
        theme::TEXT_SECONDARY,
    );
}

/// Narrow single-character text field
pub fn single_letter_input(ui: &mut egui::Ui, id: egui::Id, text: &mut String) -> egui::Response {
    let response = ui.add(
        egui::TextEdit::singleline(text)
            .id(id)
            .char_limit(1)
            .desired_width(theme::INPUT_WIDTH)
            .font(egui::FontId::monospace(theme::FONT_BODY)),
    );
    if response.changed() {
        normalize_letter_input(text);
    }
    response
}

/// Uppercase the field in place so the user sees what will be applied
pub fn normalize_letter_input(text: &mut String) {
    let upper = text.to_uppercase();
    if upper != *text {
        *text = upper;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_uppercased() {
        let mut s = String::from("q");
        normalize_letter_input(&mut s);
        assert_eq!(s, "Q");
    }

    #[test]
    fn non_letters_are_left_for_validation() {
        let mut s = String::from("7");
        normalize_letter_input(&mut s);
        assert_eq!(s, "7");
    }
}
