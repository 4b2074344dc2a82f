//! Recovers [`QuizQuestion`]s from the six-line quiz grammar the model is asked
//! to produce:
//!
//! ```text
//! Q1. Question text
//! A) option
//! B) option
//! C) option
//! D) option
//! Answer: B
//! ```
//!
//! Blocks are separated by blank lines. Malformed blocks are dropped without
//! consuming a question number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{AnswerLetter, QuizQuestion};

/// Most questions kept from one model response.
pub const MAX_QUESTIONS: usize = 5;

const MIN_BLOCK_LINES: usize = 6;

static ANSWER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)answer:\s*([A-D])").expect("ANSWER_MARKER is a valid regex pattern")
});

static OPTION_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Da-d][\)\.:]\s*").expect("OPTION_LABEL is a valid regex pattern")
});

/// Why a block was dropped. Never surfaced past the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedQuizBlock {
    TooFewLines(usize),
    MissingQuestionMarker,
    MissingAnswer,
    MissingQuestionText,
    InvalidOptions,
}

pub fn parse_quiz(text: &str) -> Vec<QuizQuestion> {
    let mut questions = Vec::new();

    for (position, block) in split_blocks(text).iter().take(MAX_QUESTIONS).enumerate() {
        match parse_block(block, questions.len() + 1) {
            Ok(question) => questions.push(question),
            Err(reason) => {
                log::debug!("Dropping quiz block {}: {:?}", position + 1, reason);
            }
        }
    }

    questions
}

/// Groups trimmed, non-empty lines into blocks separated by blank lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[&str], number: usize) -> Result<QuizQuestion, MalformedQuizBlock> {
    if lines.len() < MIN_BLOCK_LINES {
        return Err(MalformedQuizBlock::TooFewLines(lines.len()));
    }

    let header = lines[0];
    if !header.starts_with('Q') {
        return Err(MalformedQuizBlock::MissingQuestionMarker);
    }

    let last = lines[lines.len() - 1];
    let correct_letter = ANSWER_MARKER
        .captures(last)
        .and_then(|caps| caps[1].chars().next())
        .and_then(AnswerLetter::from_char)
        .ok_or(MalformedQuizBlock::MissingAnswer)?;

    let text = header
        .split_once('.')
        .map(|(_, rest)| rest.trim())
        .ok_or(MalformedQuizBlock::MissingQuestionText)?;

    // The header-relative line list and the option list are the same
    // filtered lines, so the letter indexes both identically.
    let options = lines[1..]
        .iter()
        .take(4)
        .map(|line| OPTION_LABEL.replace(line, "").trim().to_string())
        .collect();

    QuizQuestion::new(number, text, options, correct_letter)
        .ok_or(MalformedQuizBlock::InvalidOptions)
}
