//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Build and refresh the Neovim plugin index.
#[derive(Parser)]
#[command(name = "plugdex")]
#[command(about = "Scrape, enrich and rank Neovim plugins and configs")]
#[command(version)]
pub struct Cli {
    /// Directory holding the snapshot files (overrides PLUGDEX_DATA_DIR)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{ForgeArg, RunMode, ScrapeCommand};
    use clap::CommandFactory;
    use plugdex_core::Collection;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["plugdex", "--verbose", "--data-dir", "/tmp/data", "patch"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
        assert!(matches!(cli.command, Commands::Patch { collection: None }));
    }

    #[test]
    fn test_process_defaults_to_full_plugin_run() {
        let cli = Cli::parse_from(["plugdex", "process"]);
        match cli.command {
            Commands::Process { mode, collection } => {
                assert_eq!(mode, None);
                assert_eq!(collection, Collection::Plugin);
            }
            _ => panic!("expected process"),
        }
    }

    #[test]
    fn test_process_missing() {
        let cli = Cli::parse_from(["plugdex", "process", "missing", "--collection", "config"]);
        match cli.command {
            Commands::Process { mode, collection } => {
                assert_eq!(mode, Some(RunMode::Missing));
                assert_eq!(collection, Collection::Config);
            }
            _ => panic!("expected process"),
        }
    }

    #[test]
    fn test_unknown_collection_is_rejected() {
        assert!(Cli::try_parse_from(["plugdex", "derive", "--collection", "themes"]).is_err());
    }

    #[test]
    fn test_scrape_topics_repeated_flag() {
        let cli = Cli::parse_from([
            "plugdex",
            "scrape",
            "topics",
            "--topic",
            "neovim-config",
            "--topic",
            "neovim-dotfiles",
        ]);
        match cli.command {
            Commands::Scrape {
                source: ScrapeCommand::Topics { topics, collection },
            } => {
                assert_eq!(topics, vec!["neovim-config", "neovim-dotfiles"]);
                assert_eq!(collection, Collection::Config);
            }
            _ => panic!("expected scrape topics"),
        }
    }

    #[test]
    fn test_scrape_awesome_default_url() {
        let cli = Cli::parse_from(["plugdex", "scrape", "awesome"]);
        match cli.command {
            Commands::Scrape {
                source: ScrapeCommand::Awesome { url, collection },
            } => {
                assert_eq!(url, plugdex_core::services::DEFAULT_AWESOME_URL);
                assert_eq!(collection, Collection::Plugin);
            }
            _ => panic!("expected scrape awesome"),
        }
    }

    #[test]
    fn test_add_with_tags() {
        let cli = Cli::parse_from(["plugdex", "add", "srht", "~sircmpwn/hare.vim", "--tags", "syntax,hare"]);
        match cli.command {
            Commands::Add {
                forge,
                id,
                tags,
                collection,
            } => {
                assert_eq!(forge, ForgeArg::Srht);
                assert_eq!(id, "~sircmpwn/hare.vim");
                assert_eq!(tags, vec!["syntax", "hare"]);
                assert_eq!(collection, Collection::Plugin);
            }
            _ => panic!("expected add"),
        }
    }
}
