pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use clap::{Args, Parser, Subcommand};

use crate::adapters::state::json_state_store::DEFAULT_STATE_FILE;

/// Manage GPG keys in a Terraform Cloud/Enterprise private registry.
#[derive(Parser, Debug)]
#[command(name = "tfe-gpg", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the Terraform Cloud/Enterprise instance
    #[arg(long, global = true, env = "TFE_ADDRESS")]
    pub address: Option<String>,

    /// Hostname of the instance (used when no address is given)
    #[arg(long, global = true, env = "TFE_HOSTNAME")]
    pub hostname: Option<String>,

    /// API token
    #[arg(long, global = true, env = "TFE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// State file of the managed key
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state: String,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Desired configuration of the managed key.
#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Organization that owns the key
    #[arg(long)]
    pub namespace: String,

    /// File with the ASCII-armored public key ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub ascii_armor: String,

    /// Key type
    #[arg(long = "type")]
    pub key_type: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a new key and start tracking it in the state file
    Create(KeyArgs),

    /// Refresh the state file from the registry
    Read,

    /// Update the tracked key in place
    Update {
        /// New key type
        #[arg(long = "type")]
        key_type: Option<String>,
        /// Desired namespace (a change requires replacement)
        #[arg(long)]
        namespace: Option<String>,
        /// Desired key material file (a change requires replacement)
        #[arg(long, value_name = "FILE")]
        ascii_armor: Option<String>,
    },

    /// Delete the tracked key
    Delete,

    /// Show what apply would change
    Plan(KeyArgs),

    /// Create, update or replace the tracked key to match the arguments
    Apply(KeyArgs),

    /// Look up any key by namespace and key id
    Lookup {
        /// Organization that owns the key
        #[arg(long)]
        namespace: String,
        /// Key id computed by the registry
        #[arg(long)]
        key_id: String,
    },

    /// Print the resource and data source schemas as JSON
    Schema,
}
