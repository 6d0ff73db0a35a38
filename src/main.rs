//! `semval` – check one value from the command line.
//!
//! Exit status: 0 valid (or true), 1 invalid (or false), 2 indeterminate
//! boolean, 3 usage or configuration error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use semval::calendar::matches_pattern;
use semval::{IpFamily, IpFlags, Pattern, SemvalError, Settings, Truth, UrlFlags, Validator};

const EXIT_INDETERMINATE: u8 = 2;
const EXIT_USAGE: u8 = 3;

#[derive(Parser)]
#[command(name = "semval", version, about = "Strict format validation for single values")]
struct Cli {
    /// Settings file; `SEMVAL_*` environment variables override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the verdict as a JSON object.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Email address.
    Email {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// IPv4 or IPv6 address.
    Ip {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Only accept IPv4.
        #[arg(long, conflicts_with = "v6")]
        v4: bool,
        /// Only accept IPv6.
        #[arg(long)]
        v6: bool,
        /// Reject private ranges.
        #[arg(long)]
        no_private: bool,
        /// Reject reserved ranges.
        #[arg(long)]
        no_reserved: bool,
    },
    /// Base-10 integer, optionally bounded.
    Int {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i64>,
    },
    /// Boolean-like token (yes/no/on/off/true/false/1/0).
    Bool {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// URL with a scheme.
    Url {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        require_path: bool,
        #[arg(long)]
        require_query: bool,
    },
    /// Date in the given (or configured) format.
    Date {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        format: Option<String>,
    },
    /// Time in the given (or configured) format.
    Time {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        format: Option<String>,
    },
    /// Date-time in the given (or configured) format.
    Datetime {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    check: &'a str,
    value: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    truth: Option<Truth>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::from(EXIT_USAGE) } else { ExitCode::SUCCESS };
        }
    };
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

// RUST_LOG=semval=trace shows why a value was rejected
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn run(cli: Cli) -> semval::Result<ExitCode> {
    let settings = Settings::load(cli.config.as_deref())?;
    let validator = Validator::new(settings);
    let defaults = validator.settings();
    let (check, value, valid, truth) = match &cli.command {
        Command::Email { value } => ("email", value, validator.email(value), None),
        Command::Ip { value, v4, v6, no_private, no_reserved } => {
            let family = match (v4, v6) {
                (true, _) => IpFamily::V4,
                (_, true) => IpFamily::V6,
                _ => defaults.ip_family,
            };
            let flags = IpFlags {
                family,
                no_private_range: *no_private || defaults.no_private_range,
                no_reserved_range: *no_reserved || defaults.no_reserved_range,
            };
            ("ip", value, semval::ip_with(value, &flags), None)
        }
        Command::Int { value, min, max } => ("int", value, validator.integer(value.as_str(), *min, *max), None),
        Command::Bool { value } => {
            let truth = validator.boolean(value.as_str());
            ("bool", value, truth.is_determinate(), Some(truth))
        }
        Command::Url { value, require_path, require_query } => {
            let flags = UrlFlags {
                require_path: *require_path || defaults.require_path,
                require_query: *require_query || defaults.require_query,
            };
            ("url", value, semval::url(value, flags), None)
        }
        Command::Date { value, format } => {
            ("date", value, calendar(value, format.as_deref().unwrap_or(&defaults.date_format))?, None)
        }
        Command::Time { value, format } => {
            ("time", value, calendar(value, format.as_deref().unwrap_or(&defaults.time_format))?, None)
        }
        Command::Datetime { value, format } => {
            ("datetime", value, calendar(value, format.as_deref().unwrap_or(&defaults.date_time_format))?, None)
        }
    };

    if cli.json {
        let report = Report { check, value, valid, truth };
        let line = serde_json::to_string(&report).map_err(|e| SemvalError::Usage(e.to_string()))?;
        println!("{line}");
    } else {
        match truth {
            Some(truth) => println!("{truth}"),
            None => println!("{}", if valid { "valid" } else { "invalid" }),
        }
    }

    let code = match (truth, valid) {
        (Some(Truth::Indeterminate), _) => ExitCode::from(EXIT_INDETERMINATE),
        (Some(Truth::False), _) | (None, false) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    };
    Ok(code)
}

// a bad --format is a usage error, not an invalid value
fn calendar(value: &str, format: &str) -> semval::Result<bool> {
    let pattern = Pattern::compile(format)?;
    Ok(matches_pattern(value, &pattern))
}
