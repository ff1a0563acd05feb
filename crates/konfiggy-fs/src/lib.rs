//! Filesystem helpers for Konfiggy
//!
//! Provides the small, idempotent file operations used by file-backed
//! environment tag strategies, and format-agnostic loading of host
//! configuration documents.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
