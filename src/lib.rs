pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::http::ReqwestBackend;
pub use config::ClientConfig;
pub use crate::core::{
    aggregate::extract_evolution_ids,
    client::PokeApiClient,
    routes::Route,
    sprites::{dream_world_sprite_url, official_artwork_url, sprite_candidates},
    transport::{request_json, RequestOptions},
};
pub use domain::model::{EvolutionNode, PageRequest, PokemonFull, QueryTarget, ResourceKind};
pub use utils::error::{PokeApiError, Result};
