mod browser;
mod commands;

use anyhow::Result;
use commands::{Command, CommandError};
use log::info;
use metamark_config::{Config, DEFAULT_EXTENSION};
use metamark_core::io;
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("mmk");

    let command = match Command::from_args(args.get(1..).unwrap_or_default()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprint!("{}", commands::usage(program));
            process::exit(2);
        }
    };
    info!("dispatching {command:?}");

    let outcome = match command {
        Command::Help => {
            print!("{}", commands::usage(program));
            Ok(())
        }
        Command::Parse(file) => commands::parse_file(&file).map(|out| print!("{out}")),
        Command::Meta { file, key } => {
            commands::metadata(&file, key.as_deref()).map(|out| print!("{out}"))
        }
        Command::Check(files) => {
            let report = commands::check_files(&files);
            print!("{}", report.output);
            if report.failures > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Command::Browse(dir) => return browse(dir),
    };

    if let Err(e) = outcome {
        report_error(&e);
        process::exit(1);
    }

    Ok(())
}

fn report_error(e: &CommandError) {
    match commands::error_kind(e) {
        Some(kind) => info!("command failed with {kind:?}"),
        None => info!("command failed"),
    }
    eprintln!("Error: {e}");
}

/// Resolve the documents directory from the argument or the config file,
/// then hand over to the terminal browser.
fn browse(dir: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let extension = config
        .as_ref()
        .map(|c| c.extension.clone())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let (documents_path, from_config) = match (dir, config) {
        (Some(dir), _) => (dir, false),
        (None, Some(config)) => {
            info!("using documents path from {}", config_path.display());
            (config.documents_path, true)
        }
        (None, None) => {
            eprintln!("Error: No documents path provided and no config file found");
            eprintln!("Usage: mmk browse <documents-folder>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_documents_dir(&documents_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Documents path '{}'{} is invalid: {e}",
            documents_path.display(),
            source
        );
        process::exit(1);
    }

    browser::run(documents_path, &extension)
}
