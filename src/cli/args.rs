//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::config::Severity;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Datastore capacity alert notification handler
///
/// Formats a storage-capacity alert and delivers it by email and to a
/// local HP Operations Manager agent.
#[derive(Parser, Debug)]
#[command(name = "dsnotify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DSNOTIFY_CONFIG")]
    pub config: Option<String>,

    /// Dry run mode - log deliveries without performing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deliver notifications for an alert trigger document
    Send(SendArgs),

    /// Format an alert and print it without delivering
    Render(RenderArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the send command
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Trigger document path ('-' reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Override the alert description from the trigger document
    #[arg(long)]
    pub alert: Option<String>,

    /// Override the email flag (accepts true/false-style strings)
    #[arg(long, value_name = "BOOL")]
    pub email: Option<String>,

    /// Destination email address
    #[arg(long)]
    pub to: Option<String>,

    /// Source email address
    #[arg(long)]
    pub from: Option<String>,

    /// Agent message severity
    #[arg(long, value_enum)]
    pub severity: Option<SeverityArg>,

    /// Agent application name
    #[arg(long)]
    pub application: Option<String>,

    /// Path to the agent message binary
    #[arg(long)]
    pub agent_path: Option<String>,

    /// Appliance address used in the storage URL
    #[arg(long)]
    pub appliance: Option<String>,

    /// Signature line for the email footer
    #[arg(long)]
    pub signature: Option<String>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Trigger document path ('-' reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Override the alert description from the trigger document
    #[arg(long)]
    pub alert: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Raw HTML body
    Html,
    /// JSON for machine parsing
    Json,
}

/// Severity argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SeverityArg {
    Normal,
    Warning,
    Minor,
    Major,
    Critical,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Normal => Severity::Normal,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Minor => Severity::Minor,
            SeverityArg::Major => Severity::Major,
            SeverityArg::Critical => Severity::Critical,
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
