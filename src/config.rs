//! Command-line flags and the optional TOML configuration file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;

use lcm_k8s::ClusterConnection;

/// lcm - Kubernetes platform lifecycle management
#[derive(Parser, Debug, Default)]
#[command(name = "lcm")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Run locally using the kubeconfig, default expected behavior is to run in the cluster
    #[arg(long)]
    pub local: bool,

    /// Show more information
    #[arg(long)]
    pub verbose: bool,

    /// Show debug information, debug includes verbose
    #[arg(long)]
    pub debug: bool,

    /// Kubeconfig context to use with --local
    #[arg(long, value_name = "CONTEXT")]
    pub context: Option<String>,

    /// Namespace to inspect (repeatable, defaults to all namespaces)
    #[arg(short, long = "namespace", value_name = "NAMESPACE")]
    pub namespaces: Vec<String>,

    /// Configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Log verbosity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    #[default]
    Error,
    Info,
    Debug,
}

impl Verbosity {
    pub fn level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Contents of the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub namespaces: Vec<String>,
    pub local: bool,
    pub context: Option<String>,
    pub log_level: Option<Verbosity>,
    pub output: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective settings after merging flags over the file
#[derive(Debug)]
pub struct Settings {
    pub namespaces: Vec<String>,
    pub connection: ClusterConnection,
    pub verbosity: Verbosity,
    pub output: OutputFormat,
}

impl Settings {
    /// Read the config file named by `--config`, if any, and apply the flags
    pub fn load(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    pub fn merge(args: Args, file: FileConfig) -> Self {
        let verbosity = if args.debug {
            Verbosity::Debug
        } else if args.verbose {
            Verbosity::Info
        } else {
            file.log_level.unwrap_or_default()
        };

        let namespaces = if args.namespaces.is_empty() {
            file.namespaces
        } else {
            args.namespaces
        };

        Self {
            namespaces,
            connection: ClusterConnection {
                local: args.local || file.local,
                context: args.context.or(file.context),
            },
            verbosity,
            output: args.output.or(file.output).unwrap_or_default(),
        }
    }
}
