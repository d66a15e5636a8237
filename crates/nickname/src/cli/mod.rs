//! CLI support for printing nicknames.
//!
//! The `nickname` binary delegates to these helpers so argument resolution,
//! word list loading, and output formatting can be exercised in tests without
//! spawning a subprocess.

mod error;

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use ortho_config::OrthoConfig;
use serde::Serialize;
use tracing::{debug, info};

pub use error::CliError;

use crate::generator::NicknameGenerator;
use crate::nickname::Nickname;
use crate::settings::NicknameSettings;
use crate::words::WordLists;

/// `nickname` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "nickname",
    about = "Print deterministic member nicknames for user identifiers",
    version
)]
pub struct CliArgs {
    /// Word list document replacing the built-in tables.
    #[arg(long = "words", value_name = "path")]
    word_list_path: Option<PathBuf>,
    /// Emit one JSON object per line.
    #[arg(long)]
    json: bool,
    /// Identifiers to name. Read from standard input, one per line, when
    /// omitted. Values may start with `-`.
    #[arg(value_name = "identifier", allow_hyphen_values = true)]
    identifiers: Vec<String>,
}

impl CliArgs {
    /// Returns the identifiers supplied on the command line.
    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }
}

/// How nicknames are written to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One nickname per line.
    #[default]
    Plain,
    /// One `{"identifier": .., "nickname": ..}` object per line.
    Json,
}

/// Options resolved from command-line arguments and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    word_list_path: Option<PathBuf>,
    format: OutputFormat,
}

impl Options {
    /// Returns the word list path, if one was configured.
    #[must_use]
    pub fn word_list_path(&self) -> Option<&Path> {
        self.word_list_path.as_deref()
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Loads settings from `NICKNAME_*` environment variables.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the environment holds values that
/// cannot be parsed.
pub fn load_settings() -> Result<NicknameSettings, CliError> {
    NicknameSettings::load_from_iter([OsString::from("nickname")]).map_err(|err| {
        CliError::Config {
            message: err.to_string(),
        }
    })
}

/// Merges command-line arguments over loaded settings.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use nickname::NicknameSettings;
/// use nickname::cli::{CliArgs, OutputFormat, resolve_options};
///
/// let args = CliArgs::try_parse_from(["nickname", "--json", "user-42"]).expect("parse");
/// let settings = NicknameSettings {
///     word_list_path: None,
///     json: false,
/// };
///
/// let options = resolve_options(&args, &settings);
/// assert_eq!(options.format(), OutputFormat::Json);
/// ```
#[must_use]
pub fn resolve_options(args: &CliArgs, settings: &NicknameSettings) -> Options {
    let format = if args.json || settings.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };
    Options {
        word_list_path: args
            .word_list_path
            .clone()
            .or_else(|| settings.word_list_path.clone()),
        format,
    }
}

/// Builds the generator for the resolved options.
///
/// # Errors
///
/// Returns [`CliError::WordList`] if a configured word list cannot be loaded.
pub fn build_generator(options: &Options) -> Result<NicknameGenerator, CliError> {
    let Some(path) = options.word_list_path() else {
        debug!("using built-in word lists");
        return Ok(NicknameGenerator::default());
    };
    let lists = WordLists::from_file(path)?;
    info!(path = %path.display(), "using custom word lists");
    Ok(NicknameGenerator::new(lists))
}

/// Reads identifiers from `reader`, one per line.
///
/// Lines holding only whitespace are skipped. Every other line is kept
/// verbatim, so an identifier names the same member whether it arrives on
/// standard input or as an argument.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the reader fails.
pub fn read_identifiers<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    let mut identifiers = Vec::new();
    for line in reader.lines() {
        let text = line.map_err(|err| CliError::Io {
            action: "reading identifiers",
            message: err.to_string(),
        })?;
        if !text.trim().is_empty() {
            identifiers.push(text);
        }
    }
    Ok(identifiers)
}

/// Formats the output line for one identifier.
///
/// # Errors
///
/// Returns [`CliError::Encode`] if JSON encoding fails.
///
/// # Example
///
/// ```
/// use nickname::NicknameGenerator;
/// use nickname::cli::{OutputFormat, render_line};
///
/// let generator = NicknameGenerator::builtin();
/// let line = render_line(generator, "", OutputFormat::Json).expect("render");
///
/// assert_eq!(line, r#"{"identifier":"","nickname":"Bear Agile"}"#);
/// ```
pub fn render_line(
    generator: &NicknameGenerator,
    identifier: &str,
    format: OutputFormat,
) -> Result<String, CliError> {
    let nickname = generator.generate(identifier);
    match format {
        OutputFormat::Plain => Ok(nickname.into_inner()),
        OutputFormat::Json => serde_json::to_string(&NicknameRecord {
            identifier,
            nickname: &nickname,
        })
        .map_err(|err| CliError::Encode {
            message: err.to_string(),
        }),
    }
}

/// Writes one output line per identifier and returns the number written.
///
/// # Errors
///
/// Returns [`CliError`] if encoding or writing fails.
pub fn write_nicknames<W: Write>(
    generator: &NicknameGenerator,
    identifiers: &[String],
    format: OutputFormat,
    mut out: W,
) -> Result<usize, CliError> {
    for identifier in identifiers {
        let line = render_line(generator, identifier, format)?;
        writeln!(out, "{line}").map_err(|err| CliError::Io {
            action: "writing nicknames",
            message: err.to_string(),
        })?;
    }
    out.flush().map_err(|err| CliError::Io {
        action: "writing nicknames",
        message: err.to_string(),
    })?;
    Ok(identifiers.len())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NicknameRecord<'a> {
    identifier: &'a str,
    nickname: &'a Nickname,
}
