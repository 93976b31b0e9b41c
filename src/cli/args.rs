//! CLI argument definitions using clap
//!
//! Commands:
//! - treedoc demo [--path <path>]
//! - treedoc read <path>
//! - treedoc append <path> <tag> [--text <text>] [--attr k=v ...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// treedoc - audited read/write/append access to XML documents
#[derive(Parser, Debug)]
#[command(name = "treedoc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demonstration scenario against a scratch document
    Demo {
        /// Path of the demo document to create
        #[arg(long, default_value = "demo.xml")]
        path: PathBuf,
    },

    /// Read a document and print its root's children
    Read {
        /// Path to the document
        path: PathBuf,
    },

    /// Append one element to the root of a document
    Append {
        /// Path to the document
        path: PathBuf,

        /// Tag name of the new element
        tag: String,

        /// Text content of the new element
        #[arg(long)]
        text: Option<String>,

        /// Attribute in key=value form (repeatable)
        #[arg(long = "attr", value_parser = parse_attribute)]
        attrs: Vec<(String, String)>,
    },
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
