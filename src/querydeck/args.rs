use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "querydeck")]
#[command(about = "Prefix-driven web search launcher", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve input into a search URL (e.g. `go yt lofi beats`)
    #[command(alias = "g")]
    Go {
        /// Optional provider prefix followed by the search text (use `--` before
        /// words that start with a dash)
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,

        /// Open the URL in the default browser instead of printing it
        #[arg(short, long)]
        open: bool,
    },

    /// List custom search providers
    #[command(alias = "ls")]
    List {
        /// Include the built-in providers
        #[arg(short, long)]
        all: bool,
    },

    /// Add a custom search provider
    #[command(alias = "a")]
    Add {
        /// Display name
        name: String,

        /// Prefix typed before the search text
        prefix: String,

        /// URL template containing {q} exactly once
        url: String,
    },

    /// Change a custom search provider
    #[command(alias = "u")]
    Update {
        /// Prefix of the provider to change
        prefix: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New prefix
        #[arg(long = "prefix")]
        new_prefix: Option<String>,

        /// New URL template
        #[arg(long)]
        url: Option<String>,
    },

    /// Delete a custom search provider
    #[command(alias = "rm")]
    Delete {
        /// Prefix of the provider to delete
        prefix: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set the default search provider
    Default {
        /// Prefix to make the default
        prefix: Option<String>,
    },

    /// Print the date using the configured day/month names
    Date {
        /// Format this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        on: Option<String>,
    },

    /// Show or change settings
    Config {
        /// Setting key (e.g. daySchema, use-american-date)
        key: Option<String>,

        /// New value
        value: Option<String>,

        /// Reset the key to its default
        #[arg(long, conflicts_with = "value")]
        unset: bool,
    },
}
