//! Subcommands of the `plugdex` binary.

use clap::{Subcommand, ValueEnum};
use plugdex_core::services::DEFAULT_AWESOME_URL;
use plugdex_core::{Collection, ForgeType, ProcessMode};

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch forge metadata and READMEs for the reconciled resource list
    Process {
        /// `missing` only fetches resources absent from the last snapshot
        #[arg(value_enum)]
        mode: Option<RunMode>,
        #[arg(short, long, default_value = "plugin")]
        collection: Collection,
    },

    /// Merge scraped and manual resources into the reconciled list
    Patch {
        /// Only patch one collection (default: both)
        #[arg(short, long)]
        collection: Option<Collection>,
    },

    /// Build the scraped resource list
    Scrape {
        #[command(subcommand)]
        source: ScrapeCommand,
    },

    /// Rank plugins and count tags for the site renderer
    Derive {
        #[arg(short, long, default_value = "plugin")]
        collection: Collection,
    },

    /// Add a resource to the manual list
    Add {
        forge: ForgeArg,
        /// Repository as `user/repo`
        id: String,
        /// Comma-separated tags
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
        #[arg(short, long, default_value = "plugin")]
        collection: Collection,
    },
}

#[derive(Subcommand)]
pub enum ScrapeCommand {
    /// Search GitHub topics (config repositories by default)
    Topics {
        /// Topic to search; repeat for several (default: the neovim config topics)
        #[arg(long = "topic")]
        topics: Vec<String>,
        #[arg(short, long, default_value = "config")]
        collection: Collection,
    },

    /// Parse a curated Markdown list of plugins
    Awesome {
        #[arg(long, default_value = DEFAULT_AWESOME_URL)]
        url: String,
        #[arg(short, long, default_value = "plugin")]
        collection: Collection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RunMode {
    Full,
    Missing,
}

impl From<RunMode> for ProcessMode {
    fn from(mode: RunMode) -> Self {
        match mode {
            RunMode::Full => Self::Full,
            RunMode::Missing => Self::Missing,
        }
    }
}

/// Forges a resource can be added for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForgeArg {
    Github,
    Srht,
}

impl From<ForgeArg> for ForgeType {
    fn from(forge: ForgeArg) -> Self {
        match forge {
            ForgeArg::Github => Self::GitHub,
            ForgeArg::Srht => Self::SourceHut,
        }
    }
}
