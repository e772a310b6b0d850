use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a click produced: the stage the cell is in after the click and the
/// text it should now display. `changed` is false only for clicks on a cell
/// already showing its answer.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealUpdate {
    pub disclosure: Disclosure,
    pub text: String,
    pub changed: bool,
}

/// Single source of truth for what the board displays.
///
/// The category list is replaced wholesale when a new game is committed and
/// mutated one disclosure field at a time by [`Board::reveal`]; nothing else
/// writes to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    categories: Vec<Category>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            categories: Vec::new(),
        }
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Discards all categories, as at the start of a new game.
    pub fn reset(&mut self) {
        self.categories.clear();
    }

    /// Replaces the whole category list in one assignment; this is the atomic
    /// commit point of a new game.
    ///
    /// The shape is fixed configuration, so a mismatch is a broken upstream
    /// contract, not a runtime condition.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        assert_eq!(
            categories.len(),
            self.config.categories,
            "category count does not match the configured shape"
        );
        for category in &categories {
            assert_eq!(
                category.clues().len(),
                self.config.clues_per_category,
                "clue count does not match the configured shape"
            );
        }

        log::debug!("board committed: {} categories", categories.len());
        self.categories = categories;
    }

    pub fn clue(&self, pos: CellPos) -> Result<&Clue> {
        let (col, row) = self.validate_pos(pos)?;
        Ok(&self.categories[col].clues()[row])
    }

    /// Advances the addressed cell one disclosure stage and reports what the
    /// presentation layer should display. State mutation stays decoupled from
    /// rendering so either side can be tested on its own.
    pub fn reveal(&mut self, pos: CellPos) -> Result<RevealUpdate> {
        let (col, row) = self.validate_pos(pos)?;
        let clue = self.categories[col]
            .clue_mut(row)
            .ok_or(GameError::OutOfRange)?;

        let changed = clue.advance();
        log::trace!("reveal {:?}: {:?} (changed: {})", pos, clue.disclosure(), changed);

        Ok(RevealUpdate {
            disclosure: clue.disclosure(),
            text: String::from(clue.display_text()),
            changed,
        })
    }

    fn validate_pos(&self, pos: CellPos) -> Result<CellPos> {
        let (col, row) = pos;
        if col < self.categories.len() && row < self.categories[col].clues().len() {
            Ok(pos)
        } else {
            Err(GameError::OutOfRange)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn category(title: &str, clues: &[(&str, &str)]) -> Category {
        Category::new(
            title.to_string(),
            clues
                .iter()
                .map(|(q, a)| Clue::new(q.to_string(), a.to_string()))
                .collect(),
        )
    }

    fn two_by_two() -> Vec<Category> {
        vec![
            category("Math", &[("2+2", "4"), ("1+1", "2")]),
            category(
                "Lit",
                &[("Hamlet author", "Shakespeare"), ("Bell Jar author", "Plath")],
            ),
        ]
    }

    fn board() -> Board {
        let mut board = Board::new(GameConfig::new_unchecked(2, 2, 10));
        board.set_categories(two_by_two());
        board
    }

    #[test]
    fn set_categories_commits_all_cells_hidden() {
        let board = board();

        assert_eq!(board.categories().len(), 2);
        for category in board.categories() {
            assert_eq!(category.clues().len(), 2);
            for clue in category.clues() {
                assert_eq!(clue.disclosure(), Disclosure::Hidden);
            }
        }
    }

    #[test]
    fn reveal_cycles_question_then_answer_then_stays() {
        let mut board = board();

        let first = board.reveal((0, 0)).unwrap();
        assert_eq!(first.disclosure, Disclosure::QuestionShown);
        assert_eq!(first.text, "2+2");
        assert!(first.changed);

        let second = board.reveal((0, 0)).unwrap();
        assert_eq!(second.disclosure, Disclosure::AnswerShown);
        assert_eq!(second.text, "4");
        assert!(second.changed);

        let third = board.reveal((0, 0)).unwrap();
        assert_eq!(third.disclosure, Disclosure::AnswerShown);
        assert_eq!(third.text, "4");
        assert!(!third.changed);
    }

    #[test]
    fn reveal_addresses_cells_by_column_then_row() {
        let mut board = board();

        let update = board.reveal((1, 1)).unwrap();
        assert_eq!(update.text, "Bell Jar author");

        let update = board.reveal((1, 1)).unwrap();
        assert_eq!(update.text, "Plath");
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        let mut board = board();

        assert_eq!(board.clue((2, 0)).unwrap_err(), GameError::OutOfRange);
        assert_eq!(board.clue((0, 2)).unwrap_err(), GameError::OutOfRange);
        assert_eq!(board.reveal((2, 2)).unwrap_err(), GameError::OutOfRange);
    }

    #[test]
    fn empty_board_rejects_every_position() {
        let board = Board::new(GameConfig::default());

        assert!(board.is_empty());
        assert_eq!(board.clue((0, 0)).unwrap_err(), GameError::OutOfRange);
    }

    #[test]
    fn reset_discards_the_whole_committed_list() {
        let mut board = board();

        board.reset();

        assert!(board.is_empty());
        assert_eq!(board.clue((0, 0)).unwrap_err(), GameError::OutOfRange);
    }

    #[test]
    #[should_panic(expected = "category count")]
    fn committing_the_wrong_number_of_categories_fails_loudly() {
        let mut board = Board::new(GameConfig::new_unchecked(3, 2, 10));
        board.set_categories(two_by_two());
    }

    #[test]
    #[should_panic(expected = "clue count")]
    fn committing_a_short_category_fails_loudly() {
        let mut board = Board::new(GameConfig::new_unchecked(1, 3, 10));
        board.set_categories(vec![category("Math", &[("2+2", "4")])]);
    }
}
