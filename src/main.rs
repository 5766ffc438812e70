use clap::Parser;
use pokedex_client::utils::error::ErrorSeverity;
use pokedex_client::utils::{logger, validation::Validate};
use pokedex_client::{
    sprite_candidates, CliConfig, Command, PageRequest, PokeApiClient, PokeApiError, QueryTarget,
    Route,
};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        exit_with(&e);
    }

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let client = match PokeApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };

    match run(&client, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

async fn run(client: &PokeApiClient, command: Command) -> pokedex_client::Result<serde_json::Value> {
    let output = match command {
        Command::List { limit, offset } => {
            client
                .fetch_pokemon_list(PageRequest::new(limit, offset))
                .await?
        }
        Command::Get { kind, target } => client.fetch_resource(kind, target).await?,
        Command::Full { target } => serde_json::to_value(client.get_pokemon_full(target).await?)?,
        Command::Evolution { url } => client.fetch_evolution_chain(&url).await?,
        Command::Sprites { id } => json!({ "id": id, "candidates": sprite_candidates(id) }),
        Command::Open { location } => {
            let route = Route::resolve(&location).ok_or_else(|| PokeApiError::InvalidQuery {
                value: location.clone(),
                reason: "no route matches this location".to_string(),
            })?;
            tracing::info!("🧭 {} -> {}", location, route.name());

            let data = match &route {
                Route::Home => {
                    client
                        .fetch_pokemon_list(PageRequest::default())
                        .await?
                }
                Route::Pokemon { id } => {
                    let target = QueryTarget::parse(id)?;
                    serde_json::to_value(client.get_pokemon_full(target).await?)?
                }
            };

            json!({
                "route": route,
                "href": route.href(),
                "scroll": route.scroll_behavior(),
                "data": data,
            })
        }
    };

    Ok(output)
}

fn exit_with(e: &PokeApiError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
