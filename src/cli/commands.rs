//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add / visit: enroll customers and log visits
//! - list / show: browse customers
//! - rewards / redeem: rewards tracker
//! - stats / notify / settings

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stampcard::screen::Screen;

/// Stampcard - visit-based loyalty tracking
#[derive(Parser, Debug)]
#[command(name = "stampcard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the dashboard summary
    Dashboard,

    /// Enroll a new customer
    Add {
        /// Customer name
        #[arg(short, long)]
        name: String,

        /// Customer phone number
        #[arg(short, long)]
        phone: String,
    },

    /// Log a visit by phone number
    Visit {
        /// Customer phone number
        #[arg(short, long)]
        phone: String,

        /// Name to enroll with if the phone number is new
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List customers
    List {
        /// Filter by name or phone
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a customer's profile and visit history
    Show {
        /// Customer ID
        id: String,
    },

    /// Show who can redeem and who is one visit away
    Rewards,

    /// Mark a customer's reward as given
    Redeem {
        /// Customer ID
        id: String,
    },

    /// Show visit analytics
    Stats,

    /// Send a customer a progress message
    Notify {
        /// Customer ID
        id: String,
    },

    /// Show the effective configuration
    Settings,
}

impl Commands {
    /// The read-only screen this command shows, if it is one.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Commands::Dashboard => Some(Screen::Dashboard),
            Commands::List { search } => Some(Screen::CustomerList { search: search.clone() }),
            Commands::Show { id } => Some(Screen::CustomerProfile { customer_id: id.clone() }),
            Commands::Rewards => Some(Screen::RewardsTracker),
            Commands::Stats => Some(Screen::Analytics),
            Commands::Settings => Some(Screen::Settings),
            Commands::Add { .. } | Commands::Visit { .. } | Commands::Redeem { .. } | Commands::Notify { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should result in None command (dashboard)
        let cli = Cli::try_parse_from(["stampcard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["stampcard", "-v"]).unwrap();
        assert!(cli.is_verbose());
    }

    #[test]
    fn test_cli_config_option() {
        let cli = Cli::try_parse_from(["stampcard", "-c", "/path/to/stampcard.yml"]).unwrap();
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/stampcard.yml")));
    }

    #[test]
    fn test_add_command() {
        let cli = Cli::try_parse_from(["stampcard", "add", "--name", "Amina", "--phone", "0712345678"]).unwrap();
        match cli.command {
            Some(Commands::Add { name, phone }) => {
                assert_eq!(name, "Amina");
                assert_eq!(phone, "0712345678");
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_add_requires_phone() {
        assert!(Cli::try_parse_from(["stampcard", "add", "--name", "Amina"]).is_err());
    }

    #[test]
    fn test_visit_command_optional_name() {
        let cli = Cli::try_parse_from(["stampcard", "visit", "-p", "0712345678"]).unwrap();
        match cli.command {
            Some(Commands::Visit { phone, name }) => {
                assert_eq!(phone, "0712345678");
                assert!(name.is_none());
            }
            _ => panic!("Expected visit command"),
        }

        let cli = Cli::try_parse_from(["stampcard", "visit", "-p", "0712345678", "-n", "Amina"]).unwrap();
        match cli.command {
            Some(Commands::Visit { name, .. }) => assert_eq!(name, Some("Amina".to_string())),
            _ => panic!("Expected visit command"),
        }
    }

    #[test]
    fn test_list_with_search() {
        let cli = Cli::try_parse_from(["stampcard", "list", "-s", "ami"]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(
            command.screen(),
            Some(Screen::CustomerList {
                search: Some("ami".to_string())
            })
        );
    }

    #[test]
    fn test_show_maps_to_profile_screen() {
        let cli = Cli::try_parse_from(["stampcard", "show", "cus-1"]).unwrap();
        assert_eq!(
            cli.command.unwrap().screen(),
            Some(Screen::CustomerProfile {
                customer_id: "cus-1".to_string()
            })
        );
    }

    #[test]
    fn test_redeem_and_notify_are_actions() {
        let cli = Cli::try_parse_from(["stampcard", "redeem", "cus-1"]).unwrap();
        assert!(cli.command.unwrap().screen().is_none());

        let cli = Cli::try_parse_from(["stampcard", "notify", "cus-1"]).unwrap();
        match cli.command {
            Some(Commands::Notify { id }) => assert_eq!(id, "cus-1"),
            _ => panic!("Expected notify command"),
        }
    }

    #[test]
    fn test_read_only_screens() {
        for (arg, screen) in [
            ("dashboard", Screen::Dashboard),
            ("rewards", Screen::RewardsTracker),
            ("stats", Screen::Analytics),
            ("settings", Screen::Settings),
        ] {
            let cli = Cli::try_parse_from(["stampcard", arg]).unwrap();
            assert_eq!(cli.command.unwrap().screen(), Some(screen));
        }
    }

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }
}
