use super::EnvironmentTagStrategy;
use crate::Result;

/// Tag fixed in code at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTagStrategy {
    tag: String,
}

impl CodeTagStrategy {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl EnvironmentTagStrategy for CodeTagStrategy {
    fn environment_tag(&self) -> Result<String> {
        Ok(self.tag.clone())
    }
}
