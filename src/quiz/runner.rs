use std::io::{BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::quiz::display;
use crate::quiz::session::Session;
use crate::quiz::{QuestionBank, QuizError};

/// Drives a session over line-oriented input until the user quits.
/// Returns the final score.
pub fn run<G, R, W>(
    bank: &QuestionBank,
    rng: G,
    mut input: R,
    mut output: W,
) -> Result<u32, QuizError>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(bank, rng);
    let mut line = String::new();

    loop {
        let shown = match session.current_question() {
            Some((category, question)) => {
                display::print_question(&mut output, session.score(), category, question)
            }
            None => display::print_categories(&mut output, bank),
        };
        shown.map_err(QuizError::Output)?;

        line.clear();
        if input.read_line(&mut line).map_err(QuizError::Input)? == 0 {
            return Err(QuizError::InputClosed);
        }

        let outcome = session.handle_input(&line);
        debug!("{:?} -> {:?}", outcome, session.state());
        display::print_outcome(&mut output, &outcome).map_err(QuizError::Output)?;
        if session.is_terminated() {
            break;
        }
    }

    info!("Quiz finished with score {}", session.score());
    display::print_farewell(&mut output, session.score()).map_err(QuizError::Output)?;
    Ok(session.score())
}
