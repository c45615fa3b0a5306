//! Command-line argument structure.
//!
//! Turns a raw token list into either a help request or a resolved conversion
//! job.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use mp4gif_core::config::{ConversionJob, GifOptionsBuilder};

use crate::error::{CliError, CliResult};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "mp4gif",
    about = "mp4gif - Convert MP4 to GIF (requires ffmpeg)",
    override_usage = "mp4gif <input.mp4> [output.gif] [options]",
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Input video, optionally followed by the output GIF path
    #[arg(required = true, num_args = 1.., value_name = "PATHS")]
    pub paths: Vec<OsString>,

    /// Output GIF path (default: <input_basename>.gif)
    #[arg(short = 'o', long = "output", value_name = "PATH", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Frames per second (default: 10)
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub fps: Option<String>,

    /// Output width in pixels, keeps aspect ratio (optional)
    #[arg(long, value_name = "NUMBER", allow_hyphen_values = true)]
    pub width: Option<String>,

    /// Start time offset in seconds (optional)
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub start: Option<String>,

    /// Duration to convert in seconds (optional)
    #[arg(long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub duration: Option<String>,

    /// Overwrite output file if it exists
    #[arg(long)]
    pub overwrite: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// `-h/--help`: print this text and exit successfully
    Help(String),
    /// Convert with the resolved job
    Convert(ConversionJob),
}

/// Flags that consume the following token as their value.
const VALUE_FLAGS: [&str; 6] = ["-o", "--output", "--fps", "--width", "--start", "--duration"];

/// Flags that stand alone.
const SWITCH_FLAGS: [&str; 3] = ["-h", "--help", "--overwrite"];

/// Parses the tokens that follow the program name.
pub fn parse_args<I, T>(tokens: I) -> CliResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
    reject_unknown_options(&tokens)?;

    let argv = std::iter::once(OsString::from("mp4gif")).chain(tokens);

    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => return Ok(Invocation::Help(usage())),
        Err(e) => return Err(translate_clap_error(&e)),
    };

    cli.into_job().map(Invocation::Convert)
}

/// Rejects every token that starts with `-` and is not spelled exactly like a
/// known flag. clap alone would accept `-`, `--`, `--fps=24` and `-oout.gif`.
///
/// The token after a value flag is its value and is never checked, so
/// `--start -2` and `-o -` still parse. Scanning stops at the first help flag.
fn reject_unknown_options(tokens: &[OsString]) -> CliResult<()> {
    let mut iter = tokens.iter();
    while let Some(raw) = iter.next() {
        let lossy = raw.to_string_lossy();
        let token: &str = &lossy;
        if VALUE_FLAGS.contains(&token) {
            iter.next();
        } else if token == "-h" || token == "--help" {
            return Ok(());
        } else if token.starts_with('-') && !SWITCH_FLAGS.contains(&token) {
            return Err(CliError::UnknownOption(token.to_string()));
        }
    }
    Ok(())
}

/// Full help text, as printed for `--help`.
#[must_use]
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

impl Cli {
    fn into_job(self) -> CliResult<ConversionJob> {
        let mut builder = GifOptionsBuilder::new().overwrite(self.overwrite);

        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if let Some(raw) = self.fps.as_deref() {
            builder = builder.fps(parse_number("--fps", raw)?);
        }
        if let Some(raw) = self.width.as_deref() {
            builder = builder.width(parse_number("--width", raw)?);
        }
        if let Some(raw) = self.start.as_deref() {
            builder = builder.start(parse_number("--start", raw)?);
        }
        if let Some(raw) = self.duration.as_deref() {
            builder = builder.duration(parse_number("--duration", raw)?);
        }

        let mut paths = self.paths.into_iter().map(PathBuf::from);
        let input = paths.next().ok_or(CliError::MissingInput)?;
        // Positionals past the second are ignored
        let positional_output = paths.next();

        Ok(ConversionJob::new(input, positional_output, builder.build())?)
    }
}

/// Parses a numeric flag value. Surrounding whitespace is ignored; empty,
/// non-numeric, NaN and infinite values are rejected.
pub fn parse_number(flag: &str, raw: &str) -> CliResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CliError::InvalidValue(flag.to_string()))
}

fn translate_clap_error(err: &clap::Error) -> CliError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    };

    match (err.kind(), invalid_arg) {
        (ErrorKind::UnknownArgument, Some(token)) => CliError::UnknownOption(token.to_string()),
        (ErrorKind::InvalidValue, Some(arg)) => {
            // clap names the argument as e.g. "--fps <NUMBER>"
            let flag = arg.split_whitespace().next().unwrap_or(arg);
            if flag == "--output" || flag == "-o" {
                CliError::MissingValue("--output".to_string())
            } else {
                CliError::InvalidValue(flag.to_string())
            }
        }
        (ErrorKind::MissingRequiredArgument, _) => CliError::MissingInput,
        _ => CliError::Usage(first_error_line(err)),
    }
}

fn first_error_line(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
