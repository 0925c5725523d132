mod config;
mod quiz;

use std::io;
use std::process::ExitCode;

use config::Config;
use log::{debug, error};
use quiz::{QuestionBank, QuizError};

fn main() -> ExitCode {
    let config = Config::from_env();

    pretty_env_logger::init();
    debug!("Using {:?}", config);

    match play(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn play(config: &Config) -> Result<u32, QuizError> {
    let bank = QuestionBank::open(&config.questions_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    quiz::runner::run(&bank, rand::thread_rng(), stdin.lock(), stdout.lock())
}
