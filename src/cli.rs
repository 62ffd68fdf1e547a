//! Command-line interface for csscgen

use crate::config::{BuildConfig, ResourceType, DEFAULT_REGISTRY_HOST};
use crate::manifest::{self, ManifestError};
use crate::output::write_output;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// csscgen is a tool used to generate k8s templates & the artifacts for supply chain load testing
#[derive(Parser, Debug, Clone)]
#[command(name = "csscgen")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generates a kubernetes resource template
    #[command(
        name = "genk8s",
        after_help = "Examples:\n    # Generates a kubernetes resource template\n    csscgen genk8s"
    )]
    GenK8s(GenK8sArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenK8sArgs {
    /// Resource type (deployment, job)
    #[arg(short = 't', long, default_value = "deployment")]
    pub resource_type: ResourceType,

    /// Registry host
    #[arg(long, default_value = DEFAULT_REGISTRY_HOST)]
    pub registry_host: String,

    /// Number of containers
    #[arg(short = 'c', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub num_containers: u32,

    /// Number of replicas
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
    pub num_replicas: i32,

    /// Number of referrers
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub num_referrers: u32,

    /// Namespace (omitted from the manifest when unset)
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Output file name (stdout when unset)
    #[arg(short = 'f', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Name (defaults to the {{.Name}} placeholder)
    #[arg(long)]
    pub name: Option<String>,

    /// Group (defaults to the {{.Group}} placeholder)
    #[arg(long)]
    pub group: Option<String>,
}

impl From<GenK8sArgs> for BuildConfig {
    fn from(args: GenK8sArgs) -> Self {
        BuildConfig {
            resource_type: args.resource_type,
            num_containers: args.num_containers,
            num_replicas: args.num_replicas,
            num_referrers: args.num_referrers,
            registry_host: args.registry_host,
            namespace: args.namespace,
            name: args.name,
            group: args.group,
            output_path: args.output_file,
        }
    }
}

/// Run one parsed command
pub fn run(cli: Cli) -> Result<(), ManifestError> {
    match cli.command {
        Commands::GenK8s(args) => genk8s(&BuildConfig::from(args)),
    }
}

/// Build the manifest and deliver it to the configured sink
///
/// Nothing is written unless the whole document rendered successfully.
pub fn genk8s(config: &BuildConfig) -> Result<(), ManifestError> {
    debug!(?config, "Generating manifest");

    let yaml = manifest::build(config)?;
    write_output(&yaml, config.output_path.as_deref())
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
