//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use crate::render::OutputFormat;

/// Browse a JSON dataset as a paginated, sortable, searchable table.
#[derive(Debug, Parser)]
#[command(name = "datatable", version)]
pub struct Args {
    /// JSON file holding the records.
    pub dataset: PathBuf,

    /// Table options file (JSON). Defaults to options.json in the config directory.
    #[arg(short, long)]
    pub options: Option<PathBuf>,

    /// Key of the record array when the file holds an object, e.g. `users`.
    #[arg(short = 'k', long)]
    pub records_key: Option<String>,

    /// Columns to display, overriding the options file.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level written to the log file.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from([
            "datatable",
            "users.json",
            "-k",
            "users",
            "--columns",
            "firstName,age",
            "--format",
            "markup",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.dataset, PathBuf::from("users.json"));
        assert_eq!(args.records_key.as_deref(), Some("users"));
        assert_eq!(args.columns, ["firstName", "age"]);
        assert_eq!(args.format, OutputFormat::Markup);
        assert_eq!(args.log_level, LevelFilter::Debug);
        assert!(args.options.is_none());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["datatable", "data.json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_level, LevelFilter::Info);
        assert!(args.columns.is_empty());
    }
}
