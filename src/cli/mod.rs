use clap::{Parser, Subcommand};

mod help;

#[derive(Parser)]
#[command(name = "setman")]
#[command(
    about = "Store and retrieve named settings in a JSON file",
    long_about = help::TOP_LONG_ABOUT,
    after_help = help::TOP_AFTER_HELP
)]
pub struct Cli {
    /// Path to the settings file (overrides the configured default)
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record the list of input directories
    #[command(long_about = help::INIT_LONG_ABOUT, after_help = help::INIT_AFTER_HELP)]
    Init {
        /// Input directories to record (e.g., ./input/dir1)
        #[arg(required = true)]
        dirs: Vec<String>,
    },

    /// Set one setting to a value
    #[command(after_help = help::SET_AFTER_HELP)]
    Set {
        /// Setting name (known keys: result_dir, input_dirs, name)
        key: String,
        /// Value to store
        value: String,
        /// Parse VALUE as a JSON literal instead of storing it as a string
        #[arg(long)]
        json: bool,
    },

    /// Print the value of one setting
    #[command(after_help = help::GET_AFTER_HELP)]
    Get {
        /// Setting name
        key: String,
    },

    /// Print the whole settings document as a table
    #[command(after_help = help::SHOW_AFTER_HELP)]
    Show,
}
