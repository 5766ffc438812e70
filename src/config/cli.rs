use crate::config::toml_config::ClientConfig;
use crate::domain::model::{QueryTarget, ResourceKind};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex")]
#[command(about = "Query the PokéAPI from the command line")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the per-request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List Pokémon, one page at a time
    List {
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Fetch one resource by id or name
    Get {
        /// pokemon, pokemon-species, ability, type, move, item, location,
        /// region, generation, encounter-method or stat
        kind: ResourceKind,
        #[arg(value_parser = QueryTarget::parse)]
        target: QueryTarget,
    },
    /// Details, species and evolution ids in one document
    Full {
        #[arg(value_parser = QueryTarget::parse)]
        target: QueryTarget,
    },
    /// Fetch an evolution chain by its absolute URL
    Evolution { url: String },
    /// Print artwork URL candidates for a numeric id
    Sprites { id: u32 },
    /// Resolve a front-end location such as '#/pokemon/25' and fetch what it shows
    Open { location: String },
}

impl CliConfig {
    /// File configuration (or defaults) with command line overrides applied.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.api.timeout_ms = timeout_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::List { limit, .. } => validation::validate_positive_number("limit", *limit, 1),
            Command::Evolution { url } => validation::validate_url("url", url),
            Command::Sprites { id } => validation::validate_positive_number("id", *id, 1),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_command() {
        let cli = CliConfig::try_parse_from(["pokedex", "full", "Pikachu"]).unwrap();
        match cli.command {
            Command::Full { target } => assert_eq!(target, QueryTarget::Name("pikachu".into())),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_command() {
        let cli = CliConfig::try_parse_from(["pokedex", "get", "encounter-method", "1"]).unwrap();
        match cli.command {
            Command::Get { kind, target } => {
                assert_eq!(kind, ResourceKind::EncounterMethod);
                assert_eq!(target, QueryTarget::Id(1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_target_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["pokedex", "full", "0"]).is_err());
        assert!(CliConfig::try_parse_from(["pokedex", "get", "berry", "1"]).is_err());
    }

    #[test]
    fn test_list_defaults_and_validation() {
        let cli = CliConfig::try_parse_from(["pokedex", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List { limit: 20, offset: 0 }));
        assert!(cli.validate().is_ok());

        let cli = CliConfig::try_parse_from(["pokedex", "list", "--limit", "0"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://mirror.example.com/api/v2/\"\ntimeout_ms = 3000\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "pokedex",
            "--config",
            path.as_str(),
            "--timeout-ms",
            "500",
            "sprites",
            "25",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.base_url(), "https://mirror.example.com/api/v2/");
        assert_eq!(config.api.timeout_ms, 500);
    }
}
