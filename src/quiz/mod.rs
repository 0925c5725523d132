pub mod display;
pub mod error;
pub mod runner;
pub mod session;

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;

pub use error::QuizError;

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Category {
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub answers: Vec<String>,
    /// 0-based index into `answers`. Not checked against `answers.len()`.
    #[serde(rename = "answer")]
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct(&self, ordinal: usize) -> bool {
        ordinal == self.correct_index + 1
    }

    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_index).map(String::as_str)
    }
}

/// The categories loaded at startup. Read-only for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    categories: Vec<Category>,
}

impl QuestionBank {
    pub fn new(categories: Vec<Category>) -> Self {
        for category in &categories {
            if category.questions.is_empty() {
                warn!("Category {:?} has no questions and cannot be played", category.title);
            }
            for question in &category.questions {
                if question.correct_answer().is_none() {
                    warn!(
                        "Question {:?} in {:?} points at answer {} of {}",
                        question.text,
                        category.title,
                        question.correct_index,
                        question.answers.len()
                    );
                }
            }
        }
        if categories.is_empty() {
            warn!("Question bank has no categories");
        }

        Self { categories }
    }

    pub fn open(path: &Path) -> Result<Self, QuizError> {
        debug!("Loading question bank from {}", path.display());
        let data = fs::read_to_string(path).map_err(|source| QuizError::ReadBank {
            path: path.to_path_buf(),
            source,
        })?;
        let categories: Vec<Category> =
            serde_json::from_str(&data).map_err(|source| QuizError::ParseBank {
                path: path.to_path_buf(),
                source,
            })?;

        let bank = Self::new(categories);
        info!(
            "Loaded {} categories with {} questions",
            bank.len(),
            bank.categories
                .iter()
                .map(|c| c.questions.len())
                .sum::<usize>()
        );
        Ok(bank)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Picks a question index from `category` uniformly at random.
    /// Repeats across draws are allowed.
    ///
    /// `None` if the category does not exist or has no questions.
    pub fn random_question<G: Rng + ?Sized>(&self, category: usize, rng: &mut G) -> Option<usize> {
        let questions = &self.category(category)?.questions;
        if questions.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..questions.len()))
    }
}
