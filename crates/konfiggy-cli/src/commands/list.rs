use colored::Colorize;
use konfiggy_core::{KeyValueCollection, Konfiggy};

use crate::error::Result;

/// Which collection `konfiggy list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSelection {
    pub connections: bool,
    pub current: bool,
}

impl ListSelection {
    fn label(&self) -> &'static str {
        if self.connections {
            "Connection Strings"
        } else {
            "App Settings"
        }
    }
}

/// Fetch the collection named by `selection`.
pub fn collect(konfiggy: &Konfiggy, selection: ListSelection) -> Result<KeyValueCollection> {
    let collection = match (selection.connections, selection.current) {
        (false, false) => konfiggy.app_settings()?,
        (false, true) => konfiggy.environment_app_settings()?,
        (true, false) => konfiggy.connection_strings()?,
        (true, true) => konfiggy.environment_connection_strings()?,
    };
    Ok(collection)
}

pub fn run_list(konfiggy: &Konfiggy, selection: ListSelection, json: bool) -> Result<()> {
    let collection = collect(konfiggy, selection)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&collection)?);
        return Ok(());
    }

    println!("{}", selection.label().bold());
    if collection.is_empty() {
        println!("  {}", "(no entries)".dimmed());
        return Ok(());
    }
    for (key, value) in &collection {
        println!("  {} = {}", key.green(), value);
    }
    Ok(())
}
