//! Utility functions

use crate::constants::{APP_NAME, DEFAULT_CIPHERTEXT, USED_GLYPH};
use crate::model::SubstitutionModel;
use crate::types::Letter;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::warn;

// Square viewBox - for window/taskbar icons. Two letter boxes, the left one solved.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="10" fill="#09090b"/><rect x="10" y="14" width="20" height="26" rx="3" fill="none" stroke="#2dd4bf" stroke-width="3"/><rect x="34" y="14" width="20" height="26" rx="3" fill="none" stroke="#71717a" stroke-width="3"/><rect x="15" y="25" width="10" height="3" fill="#2dd4bf"/><rect x="39" y="35" width="10" height="3" fill="#e4e4e7"/><rect x="12" y="46" width="16" height="4" rx="2" fill="#a1a1aa"/><rect x="36" y="46" width="16" height="4" rx="2" fill="#a1a1aa"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Get the app data directory path
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Build the model from the first usable ciphertext: command line, then
/// settings, then the built-in puzzle.
pub fn build_model(cli: Option<&str>, configured: Option<&str>) -> SubstitutionModel {
    for (source, text) in [("command line", cli), ("settings", configured)] {
        let Some(text) = text else { continue };
        match SubstitutionModel::from_text(text) {
            Ok(model) => return model,
            Err(e) => warn!(source, error = %e, "Ignoring configured ciphertext"),
        }
    }
    SubstitutionModel::from_text(DEFAULT_CIPHERTEXT)
        .expect("built-in ciphertext is valid")
}

/// Letter bank row: A-Z with used letters replaced by a dot
pub fn letter_bank_text(used: &BTreeSet<Letter>) -> String {
    Letter::all()
        .map(|l| if used.contains(&l) { USED_GLYPH } else { l.as_char() })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Frequency summary line, e.g. "K:9  T:7  X:6"
pub fn frequency_line(table: &[(Letter, usize)]) -> String {
    table
        .iter()
        .map(|(l, n)| format!("{}:{}", l, n))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn bank_marks_used_letters() {
        let used: BTreeSet<Letter> = [l('A'), l('C'), l('Z')].into_iter().collect();
        let bank = letter_bank_text(&used);
        assert!(bank.starts_with("· B · D E"));
        assert!(bank.ends_with("X Y ·"));
        assert_eq!(bank.split(' ').count(), 26);
    }

    #[test]
    fn empty_bank_is_the_alphabet() {
        assert_eq!(letter_bank_text(&BTreeSet::new()).replace(' ', ""), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn frequency_line_lists_counts_in_order() {
        assert_eq!(frequency_line(&[(l('K'), 9), (l('T'), 7)]), "K:9  T:7");
        assert_eq!(frequency_line(&[]), "");
    }

    #[test]
    fn command_line_ciphertext_wins() {
        let m = build_model(Some("ab"), Some("cd"));
        assert_eq!(m.decoded_words(), vec!["__"]);
        assert_eq!(m.frequency_table()[0].0, l('A'));
    }

    #[test]
    fn invalid_sources_fall_through() {
        let m = build_model(Some("  "), Some("QQ"));
        assert_eq!(m.frequency_table(), &[(l('Q'), 2)]);

        let m = build_model(None, Some("123"));
        assert_eq!(m, SubstitutionModel::from_text(DEFAULT_CIPHERTEXT).unwrap());
    }

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let (rgba, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(rgba.len(), 32 * 32 * 4);
    }
}
