//! Sub-commands of `mmk`, kept free of terminal handling so they can be
//! tested directly. Each returns the text to print on success.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use metamark_core::{ErrorKind, read_metamark_file, render_ast};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{kind}: {0}", kind = .0.kind().message())]
    Parse(#[from] metamark_core::Error),
    #[error("no metadata entry for key '{0}'")]
    MissingKey(String),
    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Parse(PathBuf),
    Meta { file: PathBuf, key: Option<String> },
    Check(Vec<PathBuf>),
    Browse(Option<PathBuf>),
    Help,
}

impl Command {
    /// Interprets the arguments that follow the program name.
    pub fn from_args(args: &[String]) -> Result<Self, CommandError> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Command::Help);
        };
        match (name.as_str(), rest) {
            ("parse", [file]) => Ok(Command::Parse(PathBuf::from(file))),
            ("meta", [file]) => Ok(Command::Meta {
                file: PathBuf::from(file),
                key: None,
            }),
            ("meta", [file, key]) => Ok(Command::Meta {
                file: PathBuf::from(file),
                key: Some(key.clone()),
            }),
            ("check", files) if !files.is_empty() => {
                Ok(Command::Check(files.iter().map(PathBuf::from).collect()))
            }
            ("browse", []) => Ok(Command::Browse(None)),
            ("browse", [dir]) => Ok(Command::Browse(Some(PathBuf::from(dir)))),
            ("help" | "--help" | "-h", _) => Ok(Command::Help),
            (other, _) => Err(CommandError::Usage(format!(
                "unrecognised arguments for '{other}'"
            ))),
        }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  \
         {program} parse <file>          print the document tree\n  \
         {program} meta <file> [key]     print metadata, or one value\n  \
         {program} check <file>...       validate documents\n  \
         {program} browse [dir]          browse documents in the terminal\n  \
         {program} help                  show this message\n"
    )
}

/// `mmk parse`: the indented AST dump.
pub fn parse_file(path: &Path) -> Result<String, CommandError> {
    let doc = read_metamark_file(path)?;
    Ok(render_ast(&doc.root, 0))
}

/// `mmk meta`: every entry as `key: value`, or the first value for `key`.
pub fn metadata(path: &Path, key: Option<&str>) -> Result<String, CommandError> {
    let doc = read_metamark_file(path)?;
    match key {
        Some(key) => doc
            .get_metadata(key)
            .map(|value| format!("{value}\n"))
            .ok_or_else(|| CommandError::MissingKey(key.to_string())),
        None => {
            let mut out = String::new();
            for entry in &doc.metadata {
                writeln!(out, "{}: {}", entry.key, entry.value).unwrap();
            }
            Ok(out)
        }
    }
}

/// Result of `mmk check` over several files.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub output: String,
    pub failures: usize,
}

/// `mmk check`: one line per file, `ok` or the error.
pub fn check_files(paths: &[PathBuf]) -> CheckReport {
    let mut report = CheckReport::default();
    for path in paths {
        let line = match read_metamark_file(path) {
            Ok(doc) => format!("{}: ok ({} nodes)", path.display(), doc.root.walk().count()),
            Err(e) => {
                report.failures += 1;
                format!("{}: {}: {e}", path.display(), e.kind().message())
            }
        };
        report.output.push_str(&line);
        report.output.push('\n');
    }
    report
}

/// The kind an error maps to, when it came from the parser or file layer.
pub fn error_kind(err: &CommandError) -> Option<ErrorKind> {
    match err {
        CommandError::Parse(e) => Some(e.kind()),
        CommandError::MissingKey(_) | CommandError::Usage(_) => None,
    }
}
