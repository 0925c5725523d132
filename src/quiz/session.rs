use log::debug;
use rand::Rng;

use crate::quiz::{Category, Question, QuestionBank};

pub const QUIT_COMMAND: &str = "q";
pub const CHANGE_CATEGORY_COMMAND: &str = "c";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum State {
    #[default]
    SelectingCategory,
    AnsweringQuestion {
        category: usize,
        question: usize,
    },
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    CategoryChoice,
    AnswerChoice,
}

/// What a single line of input did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Quit,
    CategorySelected,
    CategoryCleared,
    Correct,
    Incorrect {
        /// 1-based, as shown to the user.
        correct_ordinal: usize,
        /// `None` when the question's correct index has no matching option.
        correct_text: Option<String>,
    },
    Invalid(InvalidInput),
}

pub struct Session<'a, G> {
    bank: &'a QuestionBank,
    rng: G,
    state: State,
    score: u32,
}

impl<'a, G: Rng> Session<'a, G> {
    pub fn new(bank: &'a QuestionBank, rng: G) -> Self {
        Self {
            bank,
            rng,
            state: State::default(),
            score: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_question(&self) -> Option<(&'a Category, &'a Question)> {
        match self.state {
            State::AnsweringQuestion { category, question } => {
                let category = &self.bank.categories()[category];
                Some((category, &category.questions[question]))
            }
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    pub fn handle_input(&mut self, input: &str) -> Outcome {
        let input = input.trim();
        match self.state {
            State::SelectingCategory => self.handle_category_choice(input),
            State::AnsweringQuestion { category, question } => {
                self.handle_answer(input, category, question)
            }
            State::Terminated => Outcome::Quit,
        }
    }

    fn handle_category_choice(&mut self, input: &str) -> Outcome {
        if input == QUIT_COMMAND {
            self.state = State::Terminated;
            return Outcome::Quit;
        }

        let Some(ordinal) = parse_ordinal(input, self.bank.len()) else {
            return Outcome::Invalid(InvalidInput::CategoryChoice);
        };
        let category = ordinal - 1;
        let bank = self.bank;
        let title = bank.category(category).map(|c| c.title.as_str());
        if !self.ask_from(category) {
            debug!("Category {:?} has no questions", title);
            return Outcome::Invalid(InvalidInput::CategoryChoice);
        }

        debug!("Selected category {:?}", title);
        Outcome::CategorySelected
    }

    fn handle_answer(&mut self, input: &str, category: usize, question: usize) -> Outcome {
        if input == QUIT_COMMAND {
            self.state = State::Terminated;
            return Outcome::Quit;
        }
        if input == CHANGE_CATEGORY_COMMAND {
            debug!("Changing category");
            self.state = State::SelectingCategory;
            return Outcome::CategoryCleared;
        }

        let current = &self.bank.categories()[category].questions[question];
        let Some(ordinal) = parse_ordinal(input, current.answers.len()) else {
            return Outcome::Invalid(InvalidInput::AnswerChoice);
        };

        let outcome = if current.is_correct(ordinal) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect {
                correct_ordinal: current.correct_index + 1,
                correct_text: current.correct_answer().map(str::to_string),
            }
        };
        debug!("Answered {:?} with {}: {:?}", current.text, ordinal, outcome);

        self.ask_from(category);
        outcome
    }

    /// Draws the next question from `category`. Leaves the state alone and
    /// returns false when there is nothing to draw.
    fn ask_from(&mut self, category: usize) -> bool {
        match self.bank.random_question(category, &mut self.rng) {
            Some(question) => {
                self.state = State::AnsweringQuestion { category, question };
                true
            }
            None => false,
        }
    }
}

/// Parses a 1-based menu choice in `1..=len`.
fn parse_ordinal(input: &str, len: usize) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|ordinal| (1..=len).contains(ordinal))
}
