use crate::config::Commands;
use crate::domain::model::{ImageRef, RepoRequest};
use crate::domain::ports::ModelRegistry;
use crate::utils::error::Result;
use serde_json::Value;

/// Runs one subcommand against the registry and returns the text to print.
///
/// Each arm makes exactly one call on the registry and performs no local
/// computation; failures from the registry propagate unchanged.
pub async fn dispatch(command: Commands, registry: &dyn ModelRegistry) -> Result<String> {
    let value = match command {
        Commands::Hosts { api_key } => registry.list_host_machines(api_key.as_deref()).await?,

        Commands::Functions { verbose, api_key } => {
            registry.list_functions(verbose, api_key.as_deref()).await?
        }

        Commands::ImageRepo {
            name,
            hosting_machine,
            version,
            description,
            function,
            source_language,
            api_key,
        } => {
            let request = RepoRequest {
                name,
                hosting_machine,
                version,
                description,
                function,
                source_language,
            };
            registry.create_asset_repo(&request, api_key.as_deref()).await?
        }

        Commands::ImageRepoLogin { api_key } => {
            registry.asset_repo_login(api_key.as_deref()).await?
        }

        Commands::Model {
            model_id,
            image_tag,
            image_hash,
            api_key,
        } => {
            let image = ImageRef {
                model_id,
                image_tag,
                image_hash,
            };
            registry.onboard_model(&image, api_key.as_deref()).await?
        }
    };

    render(value)
}

// Strings print bare, everything else as pretty JSON.
fn render(value: Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text),
        other => Ok(serde_json::to_string_pretty(&other)?),
    }
}
