//! Access to the operating system environment
//!
//! Tag strategies read environment variables and the machine name through
//! [`SystemEnvironment`] so they can be exercised without touching the real
//! process environment.

use std::fmt;

use crate::{Error, Result};

/// Scope an environment variable is read from.
///
/// Only the process scope exists on every platform. Where the OS has no
/// separate user or machine store, those targets read the process
/// environment as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnvironmentVariableTarget {
    #[default]
    Process,
    User,
    Machine,
}

impl fmt::Display for EnvironmentVariableTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Process => "process",
            Self::User => "user",
            Self::Machine => "machine",
        };
        f.write_str(name)
    }
}

/// Facade over OS environment queries.
pub trait SystemEnvironment: Send + Sync {
    /// Value of `name` in the given scope, `None` if unset.
    fn environment_variable(&self, name: &str, target: EnvironmentVariableTarget) -> Option<String>;

    /// Host name of the current machine.
    fn machine_name(&self) -> Result<String>;
}

/// [`SystemEnvironment`] backed by the running process and host.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl OsEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl SystemEnvironment for OsEnvironment {
    fn environment_variable(&self, name: &str, target: EnvironmentVariableTarget) -> Option<String> {
        tracing::trace!(name, %target, "Reading environment variable");
        std::env::var(name).ok()
    }

    fn machine_name(&self) -> Result<String> {
        whoami::hostname().map_err(|e| Error::MachineNameUnavailable {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_process() {
        assert_eq!(
            EnvironmentVariableTarget::default(),
            EnvironmentVariableTarget::Process
        );
    }

    #[test]
    fn os_environment_matches_process_environment() {
        let env = OsEnvironment::new();
        for (name, value) in std::env::vars().take(3) {
            assert_eq!(
                env.environment_variable(&name, EnvironmentVariableTarget::Process),
                Some(value)
            );
        }
    }

    #[test]
    fn os_environment_missing_variable_is_none() {
        let env = OsEnvironment::new();
        assert_eq!(
            env.environment_variable(
                "KONFIGGY_TEST_SURELY_UNSET_VARIABLE",
                EnvironmentVariableTarget::User
            ),
            None
        );
    }
}
