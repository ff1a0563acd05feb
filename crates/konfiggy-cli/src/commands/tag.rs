use std::path::PathBuf;

use colored::Colorize;
use konfiggy_core::{FileSettings, Konfiggy, TextFileTagStrategy};

use crate::error::{CliError, Result};

/// Print the resolved environment tag.
pub fn run_tag(konfiggy: &Konfiggy) -> Result<()> {
    println!("{}", konfiggy.environment_tag()?);
    Ok(())
}

/// Location shared by `set-tag` without `--file` and `--stored-tag`.
pub fn stored_tag_settings() -> Result<FileSettings> {
    FileSettings::platform_default()
        .ok_or_else(|| CliError::user("No per-user config directory on this platform; pass --file"))
}

/// Write `tag` into a tag file, defaulting to the per-user location.
pub fn run_set_tag(tag: &str, file: Option<PathBuf>) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(CliError::user("Refusing to store an empty environment tag"));
    }

    let settings = match file {
        Some(path) => FileSettings::new(path),
        None => stored_tag_settings()?,
    };

    let strategy = TextFileTagStrategy::new(settings);
    strategy.store_tag(tag.trim())?;

    if let Some(settings) = strategy.file_settings() {
        println!(
            "{} Stored environment tag {} in {}",
            "✓".green(),
            tag.trim().cyan(),
            settings.environment_tag_storage_file_path().display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn set_tag_writes_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("tag.txt");

        run_set_tag(" Prod ", Some(path.clone())).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Prod");
    }

    #[test]
    fn set_tag_rejects_blank() {
        let temp = TempDir::new().unwrap();
        let result = run_set_tag("  ", Some(temp.path().join("tag.txt")));
        assert!(matches!(result, Err(CliError::User { .. })));
    }
}
