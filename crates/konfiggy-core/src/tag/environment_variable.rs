use std::sync::Arc;

use super::EnvironmentTagStrategy;
use crate::Result;
use crate::environment::{EnvironmentVariableTarget, OsEnvironment, SystemEnvironment};

/// Variable read by [`EnvironmentVariableTagStrategy::new`].
pub const DEFAULT_TAG_VARIABLE: &str = "KONFIGGY_ENVIRONMENT_TAG";

/// Reads the tag from an environment variable.
///
/// An unset variable yields an empty tag.
#[derive(Clone)]
pub struct EnvironmentVariableTagStrategy {
    variable: String,
    target: EnvironmentVariableTarget,
    environment: Arc<dyn SystemEnvironment>,
}

impl EnvironmentVariableTagStrategy {
    /// Read [`DEFAULT_TAG_VARIABLE`] from the process environment.
    pub fn new() -> Self {
        Self::with_variable(DEFAULT_TAG_VARIABLE)
    }

    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            target: EnvironmentVariableTarget::Process,
            environment: Arc::new(OsEnvironment::new()),
        }
    }

    pub fn target(mut self, target: EnvironmentVariableTarget) -> Self {
        self.target = target;
        self
    }

    /// Replace the OS facade the variable is read through.
    pub fn environment(mut self, environment: Arc<dyn SystemEnvironment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for EnvironmentVariableTagStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentTagStrategy for EnvironmentVariableTagStrategy {
    fn environment_tag(&self) -> Result<String> {
        let tag = self
            .environment
            .environment_variable(&self.variable, self.target)
            .unwrap_or_default();
        tracing::debug!(variable = %self.variable, target = %self.target, %tag, "Read environment tag variable");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::FakeEnvironment;

    #[test]
    fn reads_default_variable() {
        let env = FakeEnvironment::new().with_variable(DEFAULT_TAG_VARIABLE, "Prod");
        let strategy = EnvironmentVariableTagStrategy::new().environment(Arc::new(env));
        assert_eq!(strategy.environment_tag().unwrap(), "Prod");
    }

    #[test]
    fn reads_named_variable() {
        let env = FakeEnvironment::new().with_variable("APP_ENV", "QA");
        let strategy = EnvironmentVariableTagStrategy::with_variable("APP_ENV")
            .target(EnvironmentVariableTarget::Machine)
            .environment(Arc::new(env));
        assert_eq!(strategy.variable(), "APP_ENV");
        assert_eq!(strategy.environment_tag().unwrap(), "QA");
    }

    #[test]
    fn unset_variable_is_empty_tag() {
        let strategy =
            EnvironmentVariableTagStrategy::new().environment(Arc::new(FakeEnvironment::new()));
        assert_eq!(strategy.environment_tag().unwrap(), "");
    }
}
