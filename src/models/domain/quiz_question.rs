use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of options every multiple-choice question carries.
pub const OPTION_COUNT: usize = 4;

/// Letter the model declared as the correct option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// Zero-based position of the option this letter labels.
    pub fn index(self) -> usize {
        match self {
            AnswerLetter::A => 0,
            AnswerLetter::B => 1,
            AnswerLetter::C => 2,
            AnswerLetter::D => 3,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(AnswerLetter::A),
            'B' => Some(AnswerLetter::B),
            'C' => Some(AnswerLetter::C),
            'D' => Some(AnswerLetter::D),
            _ => None,
        }
    }
}

impl FromStr for AnswerLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| format!("'{}' is not an answer letter", s))
            }
            _ => Err(format!("'{}' is not an answer letter", s)),
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            AnswerLetter::A => 'A',
            AnswerLetter::B => 'B',
            AnswerLetter::C => 'C',
            AnswerLetter::D => 'D',
        };
        write!(f, "{}", letter)
    }
}

/// A multiple-choice question recovered from quiz-grammar text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub number: usize,
    pub text: String,
    pub options: Vec<String>,
    pub correct_letter: AnswerLetter,
    pub correct_text: String,
}

impl QuizQuestion {
    /// Builds a question, returning `None` unless there are exactly four
    /// non-empty options.
    pub fn new(
        number: usize,
        text: impl Into<String>,
        options: Vec<String>,
        correct_letter: AnswerLetter,
    ) -> Option<Self> {
        if options.len() != OPTION_COUNT || options.iter().any(|o| o.is_empty()) {
            return None;
        }
        let correct_text = options.get(correct_letter.index())?.clone();

        Some(Self {
            number,
            text: text.into(),
            options,
            correct_letter,
            correct_text,
        })
    }
}
