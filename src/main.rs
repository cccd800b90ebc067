use tonemark::json;
use tonemark::normalize;
use tonemark::pinyin;
use tonemark::{ConvertOptions, ToneError};

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use itertools::Itertools;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tonemark")]
#[command(version)]
#[command(about = "Convert pinyin between tone numbers and tone marks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read one JSON value from stdin and write JSON, arrays are converted element by element
    #[arg(long, global = true)]
    json: bool,

    /// Print debug output on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Tone numbers to tone marks, ni3hao3 -> nǐhǎo
    Mark {
        /// Read v as ü
        #[arg(long)]
        v_as_umlaut: bool,

        /// Add apostrophes between syllables where needed (quan2ai1 -> quán'āi)
        #[arg(long)]
        apostrophes: bool,

        /// Conversion options as .json file, flags given on the command line are added
        #[arg(long)]
        options: Option<PathBuf>,

        input: Vec<String>,
    },
    /// Tone marks to tone numbers, nǐhǎo -> ni3hao3
    Num { input: Vec<String> },
    /// A single syllable with tone number to tone marks, fails on invalid input
    Syllable { input: Vec<String> },
    /// Index of the letter which gets the tone mark
    Place { input: Vec<String> },
    /// Tone of a single character
    Tone { input: Vec<String> },
    /// Remove all digits
    StripDigits { input: Vec<String> },
    /// Remove all tone marks
    StripMarks { input: Vec<String> },
    /// Replace v with ü
    Umlaut { input: Vec<String> },
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    Mark(ConvertOptions),
    Num,
    Syllable,
    Place,
    Tone,
    StripDigits,
    StripMarks,
    Umlaut,
}

fn optional_to_txt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

fn convert_txt(op: Operation, txt: &str) -> Result<String, ToneError> {
    Ok(match op {
        Operation::Mark(options) => pinyin::pinyin_mark_from_num(txt, &options),
        Operation::Num => pinyin::pinyin_num_from_mark(txt),
        Operation::Syllable => pinyin::syllable_mark_from_num(txt)?,
        Operation::Place => optional_to_txt(pinyin::mark_index(txt)),
        Operation::Tone => optional_to_txt(pinyin::tone_from_char_str(txt)),
        Operation::StripDigits => normalize::strip_digits(txt),
        Operation::StripMarks => normalize::strip_diacritics(txt),
        Operation::Umlaut => normalize::umlaut_substitute(txt),
    })
}

fn convert_value(op: Operation, value: &Value) -> Result<Value, ToneError> {
    Ok(match op {
        Operation::Mark(options) => json::pinyin_mark_from_num(value, &options),
        Operation::Num => json::pinyin_num_from_mark(value),
        Operation::Syllable => json::syllable_mark_from_num(value)?,
        Operation::Place => json::mark_index(value)?.map_or(Value::Null, Value::from),
        Operation::Tone => json::tone_from_char(value).map_or(Value::Null, Value::from),
        Operation::StripDigits => json::strip_digits(value),
        Operation::StripMarks => json::strip_diacritics(value),
        Operation::Umlaut => json::umlaut_substitute(value),
    })
}

fn read_options(
    path: Option<&PathBuf>,
    v_as_umlaut: bool,
    apostrophes: bool,
) -> anyhow::Result<ConvertOptions> {
    let mut options = match path {
        Some(path) => {
            let s = fs::read_to_string(path)
                .context(format!("Could not read options file {}", path.display()))?;
            serde_json::from_str(&s)
                .context(format!("Invalid options file {}", path.display()))?
        }
        None => ConvertOptions::default(),
    };
    options.v_to_umlaut |= v_as_umlaut;
    options.apostrophes |= apostrophes;
    debug!(?options, "conversion options");
    Ok(options)
}

fn operation_and_input(command: Command) -> anyhow::Result<(Operation, Vec<String>)> {
    Ok(match command {
        Command::Mark {
            v_as_umlaut,
            apostrophes,
            options,
            input,
        } => {
            let options = read_options(options.as_ref(), v_as_umlaut, apostrophes)?;
            (Operation::Mark(options), input)
        }
        Command::Num { input } => (Operation::Num, input),
        Command::Syllable { input } => (Operation::Syllable, input),
        Command::Place { input } => (Operation::Place, input),
        Command::Tone { input } => (Operation::Tone, input),
        Command::StripDigits { input } => (Operation::StripDigits, input),
        Command::StripMarks { input } => (Operation::StripMarks, input),
        Command::Umlaut { input } => (Operation::Umlaut, input),
    })
}

/// Converts the JSON value on stdin, returns false if any element failed
fn run_json(op: Operation) -> anyhow::Result<bool> {
    let mut s = String::new();
    io::stdin()
        .read_to_string(&mut s)
        .context("Could not read stdin")?;
    let value: Value = serde_json::from_str(&s).context("Invalid JSON on stdin")?;
    let mut status_ok = true;
    let mut convert = |v: &Value| {
        convert_value(op, v).unwrap_or_else(|err| {
            status_ok = false;
            eprintln!("{err}");
            Value::Null
        })
    };
    let converted = match &value {
        Value::Array(items) => Value::Array(items.iter().map(&mut convert).collect()),
        _ => convert(&value),
    };
    println!("{}", serde_json::to_string(&converted)?);
    Ok(status_ok)
}

/// Converts each line, returns false if any line failed
fn run_txt(op: Operation, input: Vec<String>) -> anyhow::Result<bool> {
    let lines = if input.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Could not read stdin")?
    } else {
        input
    };
    debug!(lines = lines.len(), ?op, "converting");
    let (converted, errors): (Vec<_>, Vec<_>) = lines
        .iter()
        .map(|line| convert_txt(op, line))
        .partition_result();
    for err in &errors {
        eprintln!("{err}");
    }
    if !converted.is_empty() {
        println!("{}", converted.iter().join("\n"));
    }
    Ok(errors.is_empty())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (op, input) = operation_and_input(cli.command)?;
    let status_ok = if cli.json {
        run_json(op)?
    } else {
        run_txt(op, input)?
    };

    if status_ok {
        Ok(())
    } else {
        Err(anyhow!("Failure!"))
    }
}
