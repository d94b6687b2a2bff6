use std::path::Path;
use std::process::Command;

use globset::Glob;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::utils::display_path;

const FALLBACK_EDITOR: &str = "nano";

pub struct ConfigOptions {
    pub show_path: bool,
    pub show: bool,
    pub edit: bool,
    pub add_exclude: Option<String>,
}

impl ConfigOptions {
    fn is_empty(&self) -> bool {
        !self.show_path && !self.show && !self.edit && self.add_exclude.is_none()
    }
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.show_path || options.is_empty() {
        print_location(&config_file_path()?);
    }

    if let Some(pattern) = &options.add_exclude {
        // Reject bad globs before touching the file.
        Glob::new(pattern)?;
        let mut config = Config::load()?;
        config.append_exclude(pattern.clone());
        config.save()?;
        println!("Added exclude pattern '{pattern}'.");
    }

    if options.show {
        print!("{}", toml::to_string_pretty(&Config::load()?)?);
    }

    if options.edit {
        edit_file(&ensure_config_file()?)?;
    }

    Ok(())
}

fn print_location(path: &Path) {
    if path.exists() {
        println!("Configuration file: {}", display_path(path));
    } else {
        println!("Configuration file: {} (not created; defaults in effect)", display_path(path));
    }
}

/// `$EDITOR`, then `$VISUAL`, may carry arguments (`code --wait`).
fn editor_command() -> (String, Vec<String>) {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find_map(|value| {
            let mut words = value.split_whitespace().map(String::from);
            words.next().map(|program| (program, words.collect()))
        })
        .unwrap_or_else(|| (FALLBACK_EDITOR.to_string(), Vec::new()))
}

fn edit_file(path: &Path) -> Result<(), AppError> {
    let (program, args) = editor_command();

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(format!("{program}: {err}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(AppError::Editor(format!("{program} exited with status {status}")))
    }
}
