use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Disclosure stage of a single clue cell. Advances one stage per click and
/// never moves backwards; `AnswerShown` is terminal until the whole board is
/// replaced by a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disclosure {
    Hidden,
    QuestionShown,
    AnswerShown,
}

impl Disclosure {
    /// Placeholder glyph a cell shows while its clue is still hidden.
    pub const HIDDEN_GLYPH: &'static str = "?";

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::AnswerShown)
    }

    /// CSS class the presentation layer applies for this stage.
    pub const fn style_class(self) -> Option<&'static str> {
        match self {
            Self::Hidden => None,
            Self::QuestionShown => Some("question-revealed"),
            Self::AnswerShown => Some("answer-revealed"),
        }
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One question/answer pair plus its disclosure stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    disclosure: Disclosure,
}

impl Clue {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            disclosure: Disclosure::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub const fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    /// Text the cell shows for the current stage.
    pub fn display_text(&self) -> &str {
        match self.disclosure {
            Disclosure::Hidden => Disclosure::HIDDEN_GLYPH,
            Disclosure::QuestionShown => &self.question,
            Disclosure::AnswerShown => &self.answer,
        }
    }

    /// Moves to the next stage, returning whether anything changed. Clicks on
    /// a terminal cell are ignored, not an error.
    pub(crate) fn advance(&mut self) -> bool {
        use Disclosure::*;

        let next = match self.disclosure {
            Hidden => QuestionShown,
            QuestionShown => AnswerShown,
            AnswerShown => return false,
        };
        self.disclosure = next;
        true
    }
}

/// A titled group of clues, displayed as one board column. The title never
/// changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: String, clues: Vec<Clue>) -> Self {
        Self { title, clues }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub(crate) fn clue_mut(&mut self, row: usize) -> Option<&mut Clue> {
        self.clues.get_mut(row)
    }
}
