use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::quiz::session::{InvalidInput, Outcome};
use crate::quiz::{Category, Question, QuestionBank};

pub fn print_categories(out: &mut impl Write, bank: &QuestionBank) -> io::Result<()> {
    writeln!(out, "Select a category:")?;
    if bank.is_empty() {
        writeln!(out, "(no categories available)")?;
    }
    for (i, category) in bank.categories().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, category.title)?;
    }
    write!(out, "Enter the category number or 'q' to quit: ")?;
    out.flush()
}

pub fn print_question(
    out: &mut impl Write,
    score: u32,
    category: &Category,
    question: &Question,
) -> io::Result<()> {
    writeln!(out, "{}", format!("Score: {}", score).white().on_blue())?;
    writeln!(out, "Category: {}", category.title)?;
    writeln!(out, "Question: {}", question.text)?;
    for (i, answer) in question.answers.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, answer)?;
    }
    write!(
        out,
        "Enter your answer (1-{}), 'c' to change category, or 'q' to quit: ",
        question.answers.len()
    )?;
    out.flush()
}

pub fn print_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Correct => writeln!(out, "{}", "Correct!".white().on_green()),
        Outcome::Incorrect {
            correct_ordinal,
            correct_text: Some(text),
        } => writeln!(
            out,
            "{}",
            format!("Sorry, the correct answer was {} ({}).", correct_ordinal, text)
                .white()
                .on_red()
        ),
        Outcome::Incorrect {
            correct_ordinal,
            correct_text: None,
        } => writeln!(
            out,
            "{}",
            format!("Sorry, the correct answer was {}.", correct_ordinal)
                .white()
                .on_red()
        ),
        Outcome::Invalid(InvalidInput::CategoryChoice) => writeln!(
            out,
            "Invalid input. Please enter a valid category number or 'q' to quit."
        ),
        Outcome::Invalid(InvalidInput::AnswerChoice) => writeln!(
            out,
            "Invalid input. Please enter a valid answer number, \
             'c' to change category, or 'q' to quit."
        ),
        Outcome::Quit | Outcome::CategorySelected | Outcome::CategoryCleared => Ok(()),
    }
}

pub fn print_farewell(out: &mut impl Write, score: u32) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Final score: {}", score)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::tests::math_bank;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn category_menu_is_one_based() {
        let bank = math_bank();
        let text = render(|out| print_categories(out, &bank));
        assert!(text.starts_with("Select a category:\n1. Math\n"));
        assert!(text.ends_with("'q' to quit: "));
    }

    #[test]
    fn empty_menu_says_so() {
        let text = render(|out| print_categories(out, &QuestionBank::new(vec![])));
        assert!(text.contains("(no categories available)"));
    }

    #[test]
    fn question_screen_lists_options() {
        let bank = math_bank();
        let category = &bank.categories()[0];
        let text = render(|out| print_question(out, 3, category, &category.questions[0]));
        assert!(text.contains("Score: 3"));
        assert!(text.contains("Category: Math\nQuestion: 2+2?\n1. 3\n2. 4\n3. 5\n"));
        assert!(text.contains("Enter your answer (1-3)"));
    }

    #[test]
    fn feedback_messages() {
        let correct = render(|out| print_outcome(out, &Outcome::Correct));
        assert!(correct.contains("Correct!"));

        let wrong = render(|out| {
            print_outcome(
                out,
                &Outcome::Incorrect {
                    correct_ordinal: 2,
                    correct_text: Some("4".to_string()),
                },
            )
        });
        assert!(wrong.contains("Sorry, the correct answer was 2 (4)."));

        let unknown = render(|out| {
            print_outcome(
                out,
                &Outcome::Incorrect {
                    correct_ordinal: 7,
                    correct_text: None,
                },
            )
        });
        assert!(unknown.contains("Sorry, the correct answer was 7."));

        let invalid = render(|out| {
            print_outcome(out, &Outcome::Invalid(InvalidInput::AnswerChoice))
        });
        assert_eq!(
            invalid,
            "Invalid input. Please enter a valid answer number, \
             'c' to change category, or 'q' to quit.\n"
        );

        assert!(render(|out| print_outcome(out, &Outcome::CategoryCleared)).is_empty());
    }
}
