use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI для PkgStore: dotted-path операции над package.json
#[derive(Parser, Debug)]
#[command(name = "pkgstore", version, about = "Read and edit package.json with dotted paths")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Where the manifest lives. Defaults to ./package.json.
#[derive(Args, Debug, Clone, Default)]
pub struct Location {
    /// Directory holding the manifest (default: current directory)
    #[arg(long)]
    pub cwd: Option<PathBuf>,
    /// Explicit manifest file (overrides <cwd>/package.json)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print the value at a dotted path
    Get {
        #[command(flatten)]
        loc: Location,
        key: String,
        /// Pretty JSON output
        #[arg(long)]
        json: bool,
    },
    /// Set a value (parsed as JSON, falls back to a plain string) and save
    Set {
        #[command(flatten)]
        loc: Location,
        key: String,
        value: String,
    },
    /// Check presence (exit code stays 0; prints FOUND / NOT FOUND)
    Has {
        #[command(flatten)]
        loc: Location,
        key: String,
        /// Own-member check: an explicit null counts as present
        #[arg(long)]
        own: bool,
    },
    /// Delete paths and save. With --force and no keys, clears the whole manifest.
    Del {
        #[command(flatten)]
        loc: Location,
        keys: Vec<String>,
        #[arg(long)]
        force: bool,
    },
    /// Union values into the array at a path and save
    Union {
        #[command(flatten)]
        loc: Location,
        key: String,
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// List top-level keys in file order
    Keys {
        #[command(flatten)]
        loc: Location,
    },
    /// Print the whole manifest as it would be saved
    Show {
        #[command(flatten)]
        loc: Location,
    },
}
