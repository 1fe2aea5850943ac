//! Question bank and quiz items
//!
//! The bank is a fixed ordered sequence. The active item is selected by
//! a rotating index that advances only on correct answers; lookup
//! normalizes by modulo, so there is no out-of-range error path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One question with its options and correct-answer index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl QuizItem {
    pub fn new(prompt: &str, options: &[&str], correct: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct,
        }
    }
}

/// Validation failures when constructing a bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Bank must contain at least one item
    Empty,
    /// Item's correct index is outside its options list
    CorrectOutOfRange { item: usize },
    /// Item has no options to choose from
    NoOptions { item: usize },
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankError::Empty => write!(f, "question bank is empty"),
            BankError::CorrectOutOfRange { item } => {
                write!(f, "item {item}: correct index out of range")
            }
            BankError::NoOptions { item } => write!(f, "item {item}: no options"),
        }
    }
}

impl std::error::Error for BankError {}

/// Fixed ordered sequence of quiz items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    items: Vec<QuizItem>,
}

impl QuestionBank {
    /// Build a bank, validating every item
    pub fn new(items: Vec<QuizItem>) -> Result<Self, BankError> {
        if items.is_empty() {
            return Err(BankError::Empty);
        }
        for (i, item) in items.iter().enumerate() {
            if item.options.is_empty() {
                return Err(BankError::NoOptions { item: i });
            }
            if item.correct >= item.options.len() {
                return Err(BankError::CorrectOutOfRange { item: i });
            }
        }
        Ok(Self { items })
    }

    /// Load a bank from a JSON array of items
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let items: Vec<QuizItem> = serde_json::from_str(json)?;
        Ok(Self::new(items)?)
    }

    /// Item at `index mod len` - always succeeds on a validated bank
    pub fn item_at(&self, index: usize) -> &QuizItem {
        &self.items[index % self.items.len()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Default bank used by the demo driver
    pub fn builtin() -> Self {
        Self::new(vec![
            QuizItem::new("2 + 2 = ?", &["3", "4", "5"], 1),
            QuizItem::new("Capital of France?", &["Lyon", "Marseille", "Paris"], 2),
            QuizItem::new("7 * 8 = ?", &["54", "56", "64"], 1),
            QuizItem::new("Largest planet?", &["Jupiter", "Saturn", "Earth"], 0),
            QuizItem::new("H2O is?", &["Hydrogen", "Water", "Helium"], 1),
        ])
        .expect("builtin bank is valid")
    }
}
