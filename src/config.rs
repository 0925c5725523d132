use std::path::PathBuf;

pub const QUESTIONS_FILE_VAR: &str = "QUIZ_QUESTIONS_FILE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// JSON question bank, relative to the working directory unless absolute
    pub questions_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from("questions.json"),
        }
    }
}

impl Config {
    /// Reads overrides from the environment, after loading an optional `.env` file.
    pub fn from_env() -> Self {
        // A missing .env file is fine
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            questions_path: lookup(QUESTIONS_FILE_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.questions_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_questions_json() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.questions_path, PathBuf::from("questions.json"));
    }

    #[test]
    fn override_replaces_path() {
        let config = Config::from_lookup(|name| {
            (name == QUESTIONS_FILE_VAR).then(|| "/tmp/bank.json".to_string())
        });
        assert_eq!(config.questions_path, PathBuf::from("/tmp/bank.json"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
