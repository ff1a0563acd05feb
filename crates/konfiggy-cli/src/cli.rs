//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Konfiggy - resolve configuration values for the current environment
#[derive(Parser, Debug)]
#[command(name = "konfiggy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host configuration file (.toml, .json, .yaml or .yml)
    #[arg(short, long, global = true, env = "KONFIGGY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tag_source: TagSourceArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the environment tag comes from.
///
/// With none of these set, the tag is read from the `environment_tag`
/// entry of the host configuration file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[group(multiple = false)]
pub struct TagSourceArgs {
    /// Use this tag as-is
    #[arg(long)]
    pub tag: Option<String>,

    /// Read the tag from an environment variable
    #[arg(long, value_name = "NAME")]
    pub env_var: Option<String>,

    /// Map the machine name to a tag using a TOML/JSON/YAML table
    #[arg(long, value_name = "FILE")]
    pub machine_map: Option<PathBuf>,

    /// Read the tag from a text file (created empty if missing)
    #[arg(long, value_name = "FILE")]
    pub tag_file: Option<PathBuf>,

    /// Read the tag saved by `set-tag` in the per-user config directory
    #[arg(long)]
    pub stored_tag: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Get an app setting for the current environment
    Get {
        /// Setting key, without the environment prefix
        key: String,
    },

    /// Get a connection string for the current environment
    Connection {
        /// Connection name, without the environment prefix
        name: String,
    },

    /// Print the resolved environment tag
    Tag,

    /// List app settings or connection strings
    ///
    /// Examples:
    ///   konfiggy -c app.toml list                 # every app setting
    ///   konfiggy -c app.toml list --current       # current environment only
    ///   konfiggy -c app.toml list --connections --json
    List {
        /// List connection strings instead of app settings
        #[arg(long)]
        connections: bool,

        /// Only the current environment, with the tag prefix removed
        #[arg(long)]
        current: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Store an environment tag in a tag file
    SetTag {
        /// The tag to store
        tag: String,

        /// Tag file to write (defaults to the per-user config directory,
        /// read back with `--stored-tag`)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
