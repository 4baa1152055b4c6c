use std::{ffi::OsString, path::PathBuf};

use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use utf8scope::{
    AnalysisOptions, CodecOptions, DEFAULT_NEXT_CHAR_INDEX, DEFAULT_PREFIX_LEN,
    DEFAULT_WATCH_LIST, Validation,
};

use crate::input::{DEFAULT_MAX_BYTES, Source};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "utf8scope",
    about = "Inspect the codepoints of a UTF-8 string",
    version
)]
#[command(group(ArgGroup::new("source").args(["text", "file"]).multiple(false)))]
pub struct Cli {
    /// Text to analyze. Without TEXT or --file, one line is read from stdin.
    #[arg(value_name = "TEXT")]
    pub text: Option<OsString>,

    /// Read the input bytes from a file.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Input longer than this is truncated, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BYTES)]
    pub max_bytes: usize,

    /// Number of leading codepoints shown as a substring.
    #[arg(long, default_value_t = DEFAULT_PREFIX_LEN)]
    pub prefix_len: usize,

    /// Codepoint index whose successor character is shown.
    #[arg(long, default_value_t = DEFAULT_NEXT_CHAR_INDEX)]
    pub index: usize,

    /// Scalar to flag when present (decimal, 0x/U+ hex, or a single character).
    ///
    /// Repeatable. Defaults to U+1F429 and U+1F408.
    #[arg(long = "watch", value_name = "SCALAR", value_parser = parse_scalar)]
    pub watch: Vec<u32>,

    /// Reject malformed continuation bytes, overlong forms and surrogates.
    #[arg(long)]
    pub strict: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Labeled lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Cli {
    pub fn source(&self) -> Source {
        match (&self.text, &self.file) {
            (Some(text), _) => Source::Arg(text.clone()),
            (None, Some(path)) => Source::File(path.clone()),
            (None, None) => Source::Stdin,
        }
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        let validation = if self.strict {
            Validation::Strict
        } else {
            Validation::Lenient
        };
        let watch_list = if self.watch.is_empty() {
            DEFAULT_WATCH_LIST.into_iter().collect()
        } else {
            self.watch.iter().copied().collect()
        };

        AnalysisOptions {
            codec: CodecOptions { validation },
            prefix_len: self.prefix_len,
            next_char_index: self.index,
            watch_list,
        }
    }
}

fn parse_scalar(raw: &str) -> Result<u32, String> {
    let hex = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .or_else(|| raw.strip_prefix("U+"))
        .or_else(|| raw.strip_prefix("u+"));

    if let Some(digits) = hex {
        return u32::from_str_radix(digits, 16).map_err(|e| format!("invalid hex scalar: {e}"));
    }

    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_ascii_digit() => Ok(u32::from(ch)),
        _ => raw
            .parse::<u32>()
            .map_err(|e| format!("invalid scalar: {e}")),
    }
}
