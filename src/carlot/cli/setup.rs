use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "carlot", bin_name = "carlot", version = get_version())]
#[command(about = "Manage a small fleet of rental cars", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Car file to use (overrides CARLOT_DATA and carlot.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every car
    #[command(alias = "ls")]
    List,

    /// Show one car
    #[command(alias = "v")]
    Show {
        /// Car ID (e.g. C001, case-insensitive)
        car_id: String,
    },

    /// Add a car to the fleet
    #[command(alias = "n")]
    Add {
        brand: String,
        model: String,
        /// Price per day
        #[arg(allow_hyphen_values = true)]
        price: String,
        image_url: String,
    },

    /// Delete an available car
    #[command(alias = "rm")]
    Delete { car_id: String },

    /// Rent a car to a customer
    Rent {
        car_id: String,
        customer: String,
        /// Number of days
        #[arg(allow_hyphen_values = true)]
        days: String,
    },

    /// Return a rented car
    Return { car_id: String },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on (overrides CARLOT_BIND and carlot.json)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, bind)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rent_with_negative_days() {
        let cli = Cli::try_parse_from(["carlot", "rent", "C001", "Alice", "-2"]).unwrap();
        match cli.command {
            Some(Commands::Rent { days, .. }) => assert_eq!(days, "-2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn data_file_is_global() {
        let cli = Cli::try_parse_from(["carlot", "list", "--data-file", "x.txt"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("x.txt")));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["carlot"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
