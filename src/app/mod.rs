//! App module - contains the main application state and logic

mod modals;
mod views;

use crate::model::{SubstitutionError, SubstitutionModel};
use crate::settings::Settings;
use crate::theme;
use crate::types::Letter;
use crate::ui::layout::GridLayout;
use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, info};

/// Which input field should take keyboard focus on the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FocusTarget {
    From,
    To,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) model: SubstitutionModel,
    pub(crate) layout: GridLayout,
    // Substitution inputs
    pub(crate) from_input: String,
    pub(crate) to_input: String,
    pub(crate) pending_focus: Option<FocusTarget>,
    // Blocking notice for a rejected substitution
    pub(crate) duplicate_warning: Option<SubstitutionError>,
    // Cipher letter under the pointer, highlighted across the grid
    pub(crate) hovered_cipher: Option<Letter>,
    // View
    pub(crate) grid_columns: usize,
    pub(crate) show_frequencies: bool,
    // Settings
    pub(crate) configured_ciphertext: Option<String>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        model: SubstitutionModel,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_model(model, settings, data_dir)
    }

    /// Build state without touching an egui context
    pub(crate) fn with_model(model: SubstitutionModel, settings: Settings, data_dir: PathBuf) -> Self {
        let grid_columns = settings.grid_columns_clamped();
        let layout = GridLayout::new(model.ciphertext(), grid_columns);

        info!(
            words = model.ciphertext().words().len(),
            letters = model.letter_count(),
            distinct = model.distinct_letter_count(),
            "Puzzle loaded"
        );

        Self {
            model,
            layout,
            from_input: String::new(),
            to_input: String::new(),
            pending_focus: Some(FocusTarget::From),
            duplicate_warning: None,
            hovered_cipher: None,
            grid_columns,
            show_frequencies: settings.show_frequencies,
            configured_ciphertext: settings.ciphertext,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ciphertext: self.configured_ciphertext.clone(),
            grid_columns: self.grid_columns,
            show_frequencies: self.show_frequencies,
        };
        settings.save(&self.data_dir);
    }

    /// Handle the "apply substitution" action from the input row.
    ///
    /// Malformed input is ignored without feedback. A duplicate target opens
    /// the warning dialog. On success both fields are cleared and focus goes
    /// back to the first one.
    pub(crate) fn apply_substitution(&mut self) {
        match self.model.propose_substitution(&self.from_input, &self.to_input) {
            Ok(applied) => {
                if let Some(previous) = applied.previous.filter(|p| *p != applied.to) {
                    debug!(from = %applied.from, %previous, "Replaced earlier substitution");
                }
                self.from_input.clear();
                self.to_input.clear();
                self.pending_focus = Some(FocusTarget::From);
                if self.model.is_solved() {
                    info!("Every cipher letter is mapped");
                }
            }
            Err(SubstitutionError::InvalidInput) => {
                debug!(from = %self.from_input, to = %self.to_input, "Ignoring malformed substitution");
            }
            Err(SubstitutionError::DuplicateTarget { letter, used_by }) => {
                info!(%letter, %used_by, "Substitution rejected, target already in use");
                self.duplicate_warning = Some(SubstitutionError::DuplicateTarget { letter, used_by });
            }
        }
    }

    /// Clicking a letter box picks its cipher letter as the source
    pub(crate) fn select_cipher(&mut self, cipher: Letter) {
        self.from_input = cipher.to_string();
        self.pending_focus = Some(FocusTarget::To);
    }

    pub(crate) fn dismiss_duplicate_warning(&mut self) {
        self.duplicate_warning = None;
        self.pending_focus = Some(FocusTarget::To);
    }

    pub(crate) fn set_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns;
        self.layout = GridLayout::new(self.model.ciphertext(), columns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(text: &str) -> App {
        let model = SubstitutionModel::from_text(text).unwrap();
        App::with_model(model, Settings::default(), PathBuf::from("."))
    }

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn apply_success_clears_inputs() {
        let mut app = app("AB BA");
        app.from_input = "a".into();
        app.to_input = "x".into();
        app.apply_substitution();

        assert_eq!(app.model.mapping_for(l('A')), Some(l('X')));
        assert!(app.from_input.is_empty() && app.to_input.is_empty());
        assert_eq!(app.pending_focus, Some(FocusTarget::From));
        assert!(app.duplicate_warning.is_none());
    }

    #[test]
    fn malformed_input_is_silently_kept() {
        let mut app = app("AB BA");
        app.pending_focus = None;
        app.from_input = "1".into();
        app.to_input = "X".into();
        let before = app.model.clone();
        app.apply_substitution();

        assert_eq!(app.model, before);
        assert!(app.duplicate_warning.is_none());
        assert_eq!(app.from_input, "1");
        assert_eq!(app.pending_focus, None);
    }

    #[test]
    fn duplicate_opens_warning_and_keeps_state() {
        let mut app = app("AB BA");
        app.model.substitute(l('A'), l('X')).unwrap();
        let before = app.model.clone();

        app.from_input = "B".into();
        app.to_input = "X".into();
        app.apply_substitution();

        assert_eq!(app.model, before);
        let warning = app.duplicate_warning.clone().unwrap();
        assert_eq!(warning.to_string(), "'X' is already used for another letter.");
        assert_eq!(app.to_input, "X");

        app.dismiss_duplicate_warning();
        assert!(app.duplicate_warning.is_none());
        assert_eq!(app.pending_focus, Some(FocusTarget::To));
    }

    #[test]
    fn selecting_a_box_fills_source() {
        let mut app = app("AB BA");
        app.select_cipher(l('B'));
        assert_eq!(app.from_input, "B");
        assert_eq!(app.pending_focus, Some(FocusTarget::To));
    }

    #[test]
    fn grid_columns_rebuild_layout() {
        let mut app = app("A B C D E F G");
        assert_eq!(app.layout.rows().len(), 2);
        app.set_grid_columns(7);
        assert_eq!(app.layout.rows().len(), 1);
    }
}
