use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Runtime configuration, read from flags or their environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "assessment-backend")]
#[command(about = "Collects proficiency self-assessment submissions into a CSV log")]
#[command(version)]
pub struct Config {
    /// Interface to listen on
    #[arg(long, default_value = "127.0.0.1", env = "ASSESSMENT_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "ASSESSMENT_PORT")]
    pub port: u16,

    /// CSV file submissions are appended to
    #[arg(
        short,
        long,
        default_value = "french_language_test_data.csv",
        env = "ASSESSMENT_OUTPUT"
    )]
    pub output: PathBuf,

    /// How data rows are laid out once the file has a header
    #[arg(long, value_enum, default_value_t = ColumnLayout::Header, env = "ASSESSMENT_COLUMN_LAYOUT")]
    pub column_layout: ColumnLayout,

    /// Pending appends buffered ahead of the row writer
    #[arg(long, default_value_t = 100, env = "ASSESSMENT_QUEUE_CAPACITY")]
    pub queue_capacity: usize,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024, env = "ASSESSMENT_BODY_LIMIT")]
    pub body_limit: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    /// Place each value under the existing header column of the same name.
    Header,
    /// Write values in the submission's own field order.
    Positional,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_legacy_deployment() {
        let config = Config::try_parse_from(["assessment-backend"]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.output, PathBuf::from("french_language_test_data.csv"));
        assert_eq!(config.column_layout, ColumnLayout::Header);
        assert_eq!(config.queue_capacity, 100);
        assert_eq!(config.body_limit, 10 * 1024 * 1024);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "assessment-backend",
            "--port",
            "8080",
            "-o",
            "/tmp/answers.csv",
            "--column-layout",
            "positional",
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.output, PathBuf::from("/tmp/answers.csv"));
        assert_eq!(config.column_layout, ColumnLayout::Positional);
    }

    #[test]
    fn rejects_unknown_layout() {
        assert!(Config::try_parse_from(["assessment-backend", "--column-layout", "sorted"]).is_err());
    }
}
