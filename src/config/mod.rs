use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

pub const DEFAULT_BASE_URL: &str = "https://platform-api.aixplain.com";

#[derive(Debug, Parser)]
#[command(name = "model-registry")]
#[command(about = "Command-line front end for the model hosting platform API")]
pub struct Cli {
    /// Base URL of the platform backend
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List hosting machines available for model deployment
    Hosts {
        /// Team API key; falls back to the TEAM_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List model functions supported by the platform
    Functions {
        /// Include full function metadata in the listing (true/false)
        #[arg(long, action = clap::ArgAction::Set, default_value_t = false)]
        verbose: bool,

        /// Team API key; falls back to the TEAM_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Register a container image repository for a new model
    ImageRepo {
        /// Model name
        #[arg(long)]
        name: String,

        /// Hosting machine ID obtained via `hosts`
        #[arg(long)]
        hosting_machine: String,

        /// Model version
        #[arg(long)]
        version: String,

        /// Model description
        #[arg(long)]
        description: String,

        /// Model function name obtained via `functions`
        #[arg(long)]
        function: String,

        /// 2-character ISO 639-1 or 3-character ISO 639-3 language code
        #[arg(long, default_value = "en")]
        source_language: String,

        /// Team API key; falls back to the TEAM_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Obtain login credentials for the image repository
    ImageRepoLogin {
        /// Team API key; falls back to the TEAM_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Onboard a built image as a usable model
    Model {
        /// Model ID obtained via `image-repo`
        #[arg(long)]
        model_id: String,

        /// Image tag to onboard
        #[arg(long)]
        image_tag: String,

        /// Image hash to onboard
        #[arg(long)]
        image_hash: String,

        /// Team API key; falls back to the TEAM_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_parses_with_api_key() {
        let cli = Cli::try_parse_from(["model-registry", "hosts", "--api-key", "ABC123"]).unwrap();
        match cli.command {
            Commands::Hosts { api_key } => assert_eq!(api_key.as_deref(), Some("ABC123")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_functions_verbose_defaults_to_false() {
        let cli = Cli::try_parse_from(["model-registry", "functions"]).unwrap();
        match cli.command {
            Commands::Functions { verbose, api_key } => {
                assert!(!verbose);
                assert_eq!(api_key, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_functions_verbose_takes_an_explicit_bool() {
        let cli =
            Cli::try_parse_from(["model-registry", "functions", "--verbose", "true"]).unwrap();
        match cli.command {
            Commands::Functions { verbose, .. } => assert!(verbose),
            other => panic!("unexpected command: {:?}", other),
        }

        let cli =
            Cli::try_parse_from(["model-registry", "functions", "--verbose", "false"]).unwrap();
        match cli.command {
            Commands::Functions { verbose, .. } => assert!(!verbose),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_image_repo_source_language_defaults_to_en() {
        let cli = Cli::try_parse_from([
            "model-registry",
            "image-repo",
            "--name",
            "sentiment",
            "--hosting-machine",
            "aix-large-1",
            "--version",
            "1.0",
            "--description",
            "sentiment classifier",
            "--function",
            "text-classification",
        ])
        .unwrap();
        match cli.command {
            Commands::ImageRepo {
                source_language,
                api_key,
                ..
            } => {
                assert_eq!(source_language, "en");
                assert_eq!(api_key, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_image_repo_missing_name_is_a_usage_error() {
        let result = Cli::try_parse_from([
            "model-registry",
            "image-repo",
            "--hosting-machine",
            "aix-large-1",
            "--version",
            "1.0",
            "--description",
            "sentiment classifier",
            "--function",
            "text-classification",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_model_requires_all_image_fields() {
        let result =
            Cli::try_parse_from(["model-registry", "model", "--model-id", "m1", "--image-tag", "v2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_base_url_validation() {
        let cli = Cli::try_parse_from(["model-registry", "--base-url", "not-a-url", "hosts"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["model-registry", "hosts"]).unwrap();
        assert!(cli.validate().is_ok());
    }
}
