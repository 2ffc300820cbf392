use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedgen")]
#[command(about = "Turns YouTube and Instagram links into ready-to-use RSS feed URLs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the feed URL for a YouTube channel/playlist or Instagram profile/hashtag
    Generate {
        /// Link to the content
        url: String,

        /// Print the result as JSON instead of a reply message
        #[arg(long, conflicts_with = "notify")]
        json: bool,

        /// Deliver the reply to the configured Notebrook channel instead of stdout
        #[arg(long)]
        notify: bool,
    },

    /// Read links from stdin, one per line, and reply to each
    Listen {
        /// Deliver replies to the configured Notebrook channel instead of stdout
        #[arg(long)]
        notify: bool,
    },

    /// Show what this bot can do
    Info,
}
