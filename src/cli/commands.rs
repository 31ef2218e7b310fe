//! CLI command definitions

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flatwiki")]
#[command(about = "Flat-file markdown wiki", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new wiki
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Directory for entry files, relative to the wiki root
        #[arg(long, default_value = "entries")]
        entries_dir: PathBuf,
    },

    /// Serve the wiki over HTTP
    Serve {
        /// Address to bind (default: the configured `bind` value)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
    },

    /// List entry titles, optionally filtered by a substring
    List {
        /// Case-insensitive substring to search for
        query: Option<String>,
    },

    /// Print the rendered HTML of an entry
    Render {
        /// Exact entry title
        title: String,
    },
}
