use konfiggy_core::Konfiggy;

use crate::error::Result;

/// Print the app setting `key` for the current environment.
pub fn run_get(konfiggy: &Konfiggy, key: &str) -> Result<()> {
    let value = konfiggy.get_app_setting(key)?;
    println!("{value}");
    Ok(())
}

/// Print the connection string `name` for the current environment.
pub fn run_connection(konfiggy: &Konfiggy, name: &str) -> Result<()> {
    let value = konfiggy.get_connection_string(name)?;
    println!("{value}");
    Ok(())
}
