//! Grid layout for the letter boxes, built once at startup

use crate::model::Ciphertext;

/// Word indices arranged into rows of at most `columns` words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    rows: Vec<Vec<usize>>,
}

impl GridLayout {
    pub fn new(ciphertext: &Ciphertext, columns: usize) -> Self {
        let columns = columns.max(1);
        let indices: Vec<usize> = (0..ciphertext.words().len()).collect();
        Self {
            rows: indices.chunks(columns).map(<[usize]>::to_vec).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// Stable widget id for a letter position
    pub fn box_id(word: usize, position: usize) -> egui::Id {
        egui::Id::new(("letter_box", word, position))
    }
}
