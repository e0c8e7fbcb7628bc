use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use arctree::Config;

/// arctree - browse and edit compressed archives as a tree
#[derive(Parser, Debug)]
#[command(name = "arctree")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Run 'arctree' without an archive to pick one from the current directory.")]
pub struct Cli {
    /// Archive to open
    pub archive: Option<PathBuf>,

    /// Lines shown by tree prompts
    #[arg(long, value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Create a new archive with this name before browsing
    #[arg(long, value_name = "NAME")]
    pub create: Option<PathBuf>,

    /// Do not ask for confirmation before deleting
    #[arg(short, long)]
    pub yes: bool,

    /// After creating an archive, browse it without asking
    #[arg(long, conflicts_with = "back")]
    pub skip: bool,

    /// After creating an archive, return without asking
    #[arg(long)]
    pub back: bool,

    /// Verbosity of the log file (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List the keyboard shortcuts of the browse tree
    HelpShortcuts,
}

impl Cli {
    /// Flags override config file and environment
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(page_size) = self.page_size {
            config.browser.page_size = page_size;
        }
        if self.skip {
            config.create.skip_to_new_archive = true;
            config.create.back_to_menu = false;
        }
        if self.back {
            config.create.back_to_menu = true;
            config.create.skip_to_new_archive = false;
        }
    }
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a number", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["arctree"]).unwrap();
        assert!(cli.archive.is_none());
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_archive_and_flags() {
        let cli =
            Cli::try_parse_from(["arctree", "photos.7z", "--page-size", "20", "-y", "-vv"]).unwrap();
        assert_eq!(cli.archive, Some(PathBuf::from("photos.7z")));
        assert_eq!(cli.page_size, Some(20));
        assert!(cli.yes);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_help_shortcuts() {
        let cli = Cli::try_parse_from(["arctree", "help-shortcuts"]).unwrap();
        assert_eq!(cli.command, Some(Commands::HelpShortcuts));
        assert!(cli.archive.is_none());
    }

    #[test]
    fn test_cli_rejects_zero_page_size() {
        assert!(Cli::try_parse_from(["arctree", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["arctree", "--page-size", "many"]).is_err());
    }

    #[test]
    fn test_cli_page_size_error_names_the_problem() {
        let err = Cli::try_parse_from(["arctree", "--page-size", "0"]).unwrap_err();
        assert!(err.to_string().contains("page size must be at least 1"), "got: {}", err);

        let err = Cli::try_parse_from(["arctree", "--page-size", "many"]).unwrap_err();
        assert!(err.to_string().contains("'many' is not a number"), "got: {}", err);
    }

    #[test]
    fn test_cli_skip_conflicts_with_back() {
        assert!(Cli::try_parse_from(["arctree", "--create", "a.7z", "--skip", "--back"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli =
            Cli::try_parse_from(["arctree", "--page-size", "7", "--create", "n.zip", "--back"])
                .unwrap();
        let mut config = Config::default();
        config.create.skip_to_new_archive = true;
        cli.apply_to(&mut config);

        assert_eq!(config.browser.page_size, 7);
        assert!(config.create.back_to_menu);
        assert!(!config.create.skip_to_new_archive);
        assert_eq!(cli.create, Some(PathBuf::from("n.zip")));
    }
}
