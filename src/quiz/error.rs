use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to read question bank {}: {source}", .path.display())]
    ReadBank {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse question bank {}: {source}", .path.display())]
    ParseBank {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("input closed before the quiz was finished")]
    InputClosed,
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
