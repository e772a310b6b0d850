use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// One renderable body cell of the built grid.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutCell {
    pub pos: CellPos,
    pub text: String,
    pub style: Option<&'static str>,
}

/// Grid description handed to the presentation layer: one header row of
/// category titles and a `clues × categories` body.
///
/// Column order follows the category order and row order the clue order as
/// stored; on a fresh board every body cell carries the hidden glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    headers: Vec<String>,
    cells: Array2<LayoutCell>,
}

impl BoardLayout {
    /// Pure function of its input; all categories must hold the same number
    /// of clues, which the [`Board`] commit guarantees.
    pub fn build(categories: &[Category]) -> Self {
        let cols = categories.len();
        let rows = categories.first().map_or(0, |c| c.clues().len());
        debug_assert!(categories.iter().all(|c| c.clues().len() == rows));

        let headers = categories
            .iter()
            .map(|category| String::from(category.title()))
            .collect();
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let clue = &categories[col].clues()[row];
            LayoutCell {
                pos: (col, row),
                text: String::from(clue.display_text()),
                style: clue.disclosure().style_class(),
            }
        });

        Self { headers, cells }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cell(&self, row: usize, col: usize) -> &LayoutCell {
        &self.cells[(row, col)]
    }
}
