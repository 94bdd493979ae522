use clap::{builder::styling, Parser, Subcommand};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "ai-terminal")]
#[command(author, version, about = "Ollama-backed assistant for commits, reviews and scaffolding")]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and check the local Ollama install
    Init,

    /// Set a config value
    Set {
        /// Config key ("host" or "model")
        key: String,
        /// Value to store
        value: String,
    },

    /// Print a config value
    Get {
        /// Config key ("host" or "model")
        key: String,
    },

    /// Set the Ollama endpoint
    SetHost {
        /// Endpoint URL; prompted for when omitted
        host: Option<String>,
    },

    /// Pick the default model from those installed
    SetModel,

    /// List installed models, or the public catalog with "available"
    List {
        /// Pass "available" to list downloadable models instead
        what: Option<String>,
    },

    /// Generate a commit message for staged changes
    Commit {
        /// Skip confirmation before committing
        #[arg(short = 'y', long)]
        yes: bool,

        /// Only generate and print the message, do not commit
        #[arg(short, long)]
        dry_run: bool,
    },

    /// Review staged changes and write the findings to code_review.md
    Review,

    /// Generate a UI component under src/
    Component {
        /// Component name
        name: String,

        /// Target directory under src/ (defaults to "components")
        path: Option<String>,
    },

    /// Generate a custom hook under src/hooks/
    Hooks {
        /// Hook name
        name: String,
    },
}
