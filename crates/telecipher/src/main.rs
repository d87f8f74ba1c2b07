mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "telecipher", version, about = "Telemetry payload scrambler")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(code = err.code, "command failed");
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["telecipher", "encode", "ABCDEF", "--key", "3"])
            .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.key.key, 3);
                assert_eq!(args.key.max_len, 10_000);
                assert_eq!(args.payload.text.as_deref(), Some("ABCDEF"));
                assert!(!args.upper);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_key_reaches_validation() {
        let cli = Cli::try_parse_from(["telecipher", "decode", "ABCD", "-k", "-3"])
            .expect("negative key should parse");
        match cli.command {
            Command::Decode(args) => assert_eq!(args.key.key, -3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_text_and_file_together() {
        let err = Cli::try_parse_from([
            "telecipher",
            "encode",
            "ABCD",
            "--file",
            "/tmp/payload.txt",
            "--key",
            "1",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_table_with_global_format() {
        let cli = Cli::try_parse_from(["telecipher", "table", "--format", "json"])
            .expect("table args should parse");
        assert!(matches!(cli.command, Command::Table(_)));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }
}
