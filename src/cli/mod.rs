//! CLI module for Glimt.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Glimt - Conversational Video Search
///
/// Ask questions against indexed video content and jump straight to the
/// matching moments. The name "Glimt" comes from the Norwegian/Scandinavian
/// word for "glimpse."
#[derive(Parser, Debug)]
#[command(name = "glimt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a video by URL and index its spoken words
    Upload {
        /// Video URL (e.g. a YouTube link)
        url: String,

        /// Collection name (defaults to the configured collection)
        #[arg(long)]
        collection: Option<String>,
    },

    /// Ask a question about a video and get an answer with timestamps
    Ask {
        /// The question to ask
        question: String,

        /// Video id returned by upload
        #[arg(long)]
        video: String,

        /// Maximum number of matching segments to use
        #[arg(short = 'n', long)]
        max_results: Option<usize>,

        /// LLM model to use for response generation
        #[arg(short, long)]
        model: Option<String>,

        /// Source URL, used to print jump links for matches
        #[arg(long)]
        url: Option<String>,
    },

    /// Search a video's spoken content for matching moments
    Search {
        /// Search query
        query: String,

        /// Video id returned by upload
        #[arg(long)]
        video: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Source URL, used to print jump links for matches
        #[arg(long)]
        url: Option<String>,
    },

    /// Generate a short multiple-choice quiz from a video
    Quiz {
        /// Quiz topic
        #[arg(default_value = "main concepts")]
        topic: String,

        /// Video id returned by upload
        #[arg(long)]
        video: String,

        /// Number of questions
        #[arg(short = 'q', long, default_value = "5")]
        questions: usize,
    },

    /// Build a highlight reel from comma-separated topics
    Reel {
        /// Comma-separated topics
        #[arg(default_value = "overview, example, key concept")]
        topics: String,

        /// Video id returned by upload
        #[arg(long)]
        video: String,

        /// Source URL, used to print a jump link fallback
        #[arg(long)]
        url: Option<String>,
    },

    /// Fetch a video's transcript
    Transcript {
        /// Video id returned by upload
        #[arg(long)]
        video: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Start HTTP API server for integration with other systems
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "llm.model")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
