//! Command-line parsing
//!
//! Supports:
//! - `@filename` or `filename` → read a text file
//! - `@@` → read the clipboard
//! - `--rate=<f32>`, `--voice=<name>`, `--lang=<tag>`, `--wpm=<u32>`,
//!   `--stride=<usize>` → playback overrides
//! - `-h` or `--help` → usage

use crate::config::Config;
use crate::input::{ClipboardSource, FileSource, TextSource};
use std::str::FromStr;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: readalong <@file | @@> [options]

  @file            read aloud a plain-text file (the @ is optional)
  @@               read aloud the clipboard

Options:
  --rate=<f32>     speech rate multiplier (0.1 to 10, default 1.0)
  --voice=<name>   starting voice
  --lang=<tag>     language of the offered voices (default en-US)
  --wpm=<u32>      simulated speaking speed at rate 1.0 (default 180)
  --stride=<n>     report every n-th word boundary only (default 1)
  -h, --help       show this help

Keys: space play/pause, v next voice, r restart, q quit";

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("No text source given")]
    MissingSource,

    #[error("More than one text source given: {0}")]
    ExtraSource(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for --{option}: {value}")]
    InvalidValue { option: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(String),
    Clipboard,
}

impl Source {
    pub fn open(&self) -> Box<dyn TextSource> {
        match self {
            Source::File(path) => Box::new(FileSource::new(path)),
            Source::Clipboard => Box::new(ClipboardSource),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overrides {
    pub rate: Option<f32>,
    pub voice: Option<String>,
    pub lang: Option<String>,
    pub wpm: Option<u32>,
    pub stride: Option<usize>,
}

impl Overrides {
    /// Layer the overrides onto `config`. The rate is clamped to the accepted range.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(rate) = self.rate {
            let range = &config.playback.rate_range;
            config.playback.rate = rate.clamp(*range.start(), *range.end());
        }
        if let Some(voice) = &self.voice {
            config.playback.voice = Some(voice.clone());
        }
        if let Some(lang) = &self.lang {
            config.playback.voice_lang = lang.clone();
        }
        if let Some(wpm) = self.wpm {
            config.engine.base_wpm = wpm.max(1);
        }
        if let Some(stride) = self.stride {
            config.engine.boundary_stride = stride.max(1);
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Help,
    Run { source: Source, overrides: Overrides },
}

fn parse_value<T: FromStr>(option: &str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    })
}

fn parse_source(arg: &str) -> Source {
    match arg.strip_prefix('@') {
        Some(rest) if rest.trim().is_empty() || rest.trim() == "@" => Source::Clipboard,
        Some(rest) => Source::File(rest.trim().to_string()),
        None => Source::File(arg.to_string()),
    }
}

/// Parse the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliCommand, CliError> {
    let mut source = None;
    let mut overrides = Overrides::default();

    for arg in args {
        let arg = arg.as_ref().trim();
        if arg.is_empty() {
            continue;
        }

        if arg == "-h" || arg == "--help" {
            return Ok(CliCommand::Help);
        }

        if let Some(option) = arg.strip_prefix("--") {
            let (name, value) = option
                .split_once('=')
                .ok_or_else(|| CliError::UnknownOption(arg.to_string()))?;
            match name {
                "rate" => overrides.rate = Some(parse_value(name, value)?),
                "voice" => overrides.voice = Some(value.to_string()),
                "lang" => overrides.lang = Some(value.to_string()),
                "wpm" => overrides.wpm = Some(parse_value(name, value)?),
                "stride" => overrides.stride = Some(parse_value(name, value)?),
                _ => return Err(CliError::UnknownOption(arg.to_string())),
            }
            continue;
        }

        if source.is_some() {
            return Err(CliError::ExtraSource(arg.to_string()));
        }
        source = Some(parse_source(arg));
    }

    let source = source.ok_or(CliError::MissingSource)?;
    Ok(CliCommand::Run { source, overrides })
}
