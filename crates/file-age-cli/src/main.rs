//! is-older-than - check whether a file is older than a time threshold.
//!
//! A single-shot predicate for scripts: the exit code carries the verdict,
//! so `is-older-than app.log --weeks 2 && rotate app.log` does the right
//! thing. All calendar logic lives in the `file-age` library; this binary
//! only parses the command line, reads the clock, formats output, and maps
//! errors to exit codes.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use file_age_core::{decide, file_modified_time, resolve, validate, AgeError, RawOptions, Verdict};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Exit code for invalid arguments, unknown options, and the "file is not
/// older" verdict. The overload is long-standing tool behavior; library
/// callers can tell the cases apart via [`Verdict`].
const EXIT_NOT_OLDER: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 1;
const EXIT_FILE_NOT_FOUND: u8 = 2;
const EXIT_FILE_ACCESS: u8 = 3;
const EXIT_INVALID_COMBINATION: u8 = 4;
const EXIT_INVALID_VALUE: u8 = 5;

#[derive(Parser, Debug)]
#[command(
    name = "is-older-than",
    version,
    about = "Check whether a file is older than a time threshold (default: 6 months)",
    after_help = "Exit codes:\n  \
        0: file is older than the threshold\n  \
        1: invalid arguments or file is not older\n  \
        2: file not found\n  \
        3: file access error\n  \
        4: invalid parameter combination\n  \
        5: invalid parameter value"
)]
struct Cli {
    /// Path to the file to check
    filepath: PathBuf,

    /// Age threshold in days (excludes the other threshold options)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    days: Option<String>,

    /// Age threshold in weeks (excludes the other threshold options)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    weeks: Option<String>,

    /// Age threshold in months (combinable with --years, max 11 then)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    months: Option<String>,

    /// Age threshold in years (combinable with --months)
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    years: Option<String>,

    /// Compare against the exact current time instead of 23:59:59 of the
    /// previous day
    #[arg(long)]
    exact: bool,

    /// Print the verdict as JSON instead of the confirmation lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err),
    };

    initialize_logging(&cli);

    match run(&cli) {
        Ok(verdict) => report(&cli, &verdict),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Map a clap parse failure to the documented exit codes. Help and version
/// are not failures; everything else (unknown option, missing path,
/// missing value) is an argument error.
fn handle_parse_error(err: &clap::Error) -> ExitCode {
    let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_INVALID_ARGS,
    };
    // clap writes help/version to stdout and diagnostics to stderr.
    let _ = err.print();
    ExitCode::from(code)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn run(cli: &Cli) -> Result<Verdict, AgeError> {
    let raw = RawOptions {
        days: cli.days.clone(),
        weeks: cli.weeks.clone(),
        months: cli.months.clone(),
        years: cli.years.clone(),
        exact: cli.exact,
    };
    let (spec, mode) = validate(&raw)?;
    debug!(?spec, ?mode, "validated threshold options");

    let file_time = file_modified_time(&cli.filepath)?;

    let now = Local::now().naive_local();
    let reference_time = resolve(mode, &spec, now)?;
    debug!(%file_time, %reference_time, "comparing instants");

    Ok(decide(file_time, reference_time))
}

#[derive(Serialize)]
struct JsonReport {
    file: String,
    older: bool,
    file_time: String,
    reference_time: String,
}

fn report(cli: &Cli, verdict: &Verdict) -> ExitCode {
    if cli.json {
        let payload = JsonReport {
            file: cli.filepath.display().to_string(),
            older: verdict.is_older(),
            file_time: verdict.file_time.format(TIME_FORMAT).to_string(),
            reference_time: verdict.reference_time.format(TIME_FORMAT).to_string(),
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(body) => println!("{body}"),
            Err(err) => {
                eprintln!("Error: failed to encode report: {err}");
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    } else if verdict.is_older() {
        println!(
            "File '{}' is older than specified period",
            cli.filepath.display()
        );
        println!("File modified: {}", verdict.file_time.format(TIME_FORMAT));
        println!(
            "Reference time: {}",
            verdict.reference_time.format(TIME_FORMAT)
        );
    } else {
        println!(
            "File '{}' is NOT older than specified period",
            cli.filepath.display()
        );
    }

    if verdict.is_older() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NOT_OLDER)
    }
}

/// Exit-code mapping happens only here, at the process boundary.
fn exit_code(err: &AgeError) -> u8 {
    match err {
        AgeError::InvalidArguments(_) => EXIT_INVALID_ARGS,
        AgeError::FileNotFound(_) => EXIT_FILE_NOT_FOUND,
        AgeError::FileAccess(_) => EXIT_FILE_ACCESS,
        AgeError::InvalidCombination(_) => EXIT_INVALID_COMBINATION,
        AgeError::InvalidValue(_) | AgeError::Unrepresentable(_) => EXIT_INVALID_VALUE,
    }
}
