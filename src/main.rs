mod error;
mod file_loader;
mod file_source;
mod locator;
mod stream_loader;

use clap::Parser;
use locator::Backend;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "getline")]
#[command(about = "Read a line from a file after skipping lines and moving a certain distance")]
struct Args {
    /// Path to the input file
    file_path: PathBuf,

    /// Number of characters to move after the beginning of the line
    #[arg(allow_negative_numbers = true)]
    x_value: i64,

    /// Number of lines to skip
    #[arg(allow_negative_numbers = true)]
    y_value: i64,

    /// Read through a buffered stream instead of memory-mapping the file
    #[arg(long)]
    no_mmap: bool,

    /// Logging filter string (e.g. "getline=debug" or "trace")
    #[arg(long, default_value = "warn")]
    log: String,
}

fn init_logger(filters: &str) -> Result<(), log::SetLoggerError> {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.parse_filters(filters);
    builder.try_init()
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logger(&args.log) {
        eprintln!("Failed to initialise logger: {}", e);
        return ExitCode::FAILURE;
    }

    let backend = if args.no_mmap {
        Backend::Stream
    } else {
        Backend::Mapped
    };

    match locator::locate_path(&args.file_path, args.y_value, args.x_value, backend) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let args = Args::try_parse_from(["getline", "input.txt", "12", "3"]).unwrap();
        assert_eq!(args.file_path, PathBuf::from("input.txt"));
        assert_eq!(args.x_value, 12);
        assert_eq!(args.y_value, 3);
        assert!(!args.no_mmap);
        assert_eq!(args.log, "warn");
    }

    #[test]
    fn test_parse_negative_values() {
        let args = Args::try_parse_from(["getline", "input.txt", "-4", "-1"]).unwrap();
        assert_eq!(args.x_value, -4);
        assert_eq!(args.y_value, -1);
    }

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["getline", "--no-mmap", "--log", "debug", "f", "0", "0"])
                .unwrap();
        assert!(args.no_mmap);
        assert_eq!(args.log, "debug");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Args::try_parse_from(["getline"]).is_err());
        assert!(Args::try_parse_from(["getline", "input.txt", "1"]).is_err());
        assert!(Args::try_parse_from(["getline", "input.txt", "abc", "1"]).is_err());
        assert!(Args::try_parse_from(["getline", "input.txt", "1", "2.5"]).is_err());
        assert!(Args::try_parse_from(["getline", "input.txt", "1", "2", "3"]).is_err());
    }
}
