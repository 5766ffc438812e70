use crate::adapters::http::ReqwestBackend;
use crate::config::toml_config::ClientConfig;
use crate::core::transport::{request_json, RequestOptions};
use crate::domain::model::{PageRequest, QueryTarget, ResourceKind};
use crate::domain::ports::HttpBackend;
use crate::utils::error::Result;
use serde_json::Value;

/// Client for the upstream REST API. Every fetch is a single request whose
/// parsed JSON body is returned unchanged.
#[derive(Debug, Clone)]
pub struct PokeApiClient<B: HttpBackend = ReqwestBackend> {
    backend: B,
    base_url: String,
    options: RequestOptions,
}

impl PokeApiClient<ReqwestBackend> {
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let backend = ReqwestBackend::with_user_agent(&config.api.user_agent)?;
        Ok(Self::with_backend(backend, config))
    }
}

impl<B: HttpBackend> PokeApiClient<B> {
    pub fn with_backend(backend: B, config: &ClientConfig) -> Self {
        Self {
            backend,
            base_url: config.base_url(),
            options: config.request_options(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Replaces the per-request options, e.g. to shorten the timeout.
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    pub fn resource_url(&self, kind: ResourceKind, target: &QueryTarget) -> String {
        format!("{}{}/{}", self.base_url, kind.path(), target)
    }

    /// Requests an absolute URL with this client's options.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        request_json(&self.backend, url, &self.options).await
    }

    pub async fn fetch_pokemon_list(&self, page: PageRequest) -> Result<Value> {
        let url = format!(
            "{}{}?limit={}&offset={}",
            self.base_url,
            ResourceKind::Pokemon.path(),
            page.limit,
            page.offset
        );
        self.get_json(&url).await
    }

    pub async fn fetch_resource(
        &self,
        kind: ResourceKind,
        target: impl Into<QueryTarget>,
    ) -> Result<Value> {
        let url = self.resource_url(kind, &target.into());
        self.get_json(&url).await
    }

    pub async fn fetch_pokemon_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Pokemon, target).await
    }

    pub async fn fetch_pokemon_species(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::PokemonSpecies, target).await
    }

    /// Evolution chains are only reachable through the absolute URL a species
    /// payload links to.
    pub async fn fetch_evolution_chain(&self, url: &str) -> Result<Value> {
        self.get_json(url).await
    }

    pub async fn fetch_ability_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Ability, target).await
    }

    pub async fn fetch_type_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Type, target).await
    }

    pub async fn fetch_move_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Move, target).await
    }

    pub async fn fetch_item_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Item, target).await
    }

    pub async fn fetch_location_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Location, target).await
    }

    pub async fn fetch_region_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Region, target).await
    }

    pub async fn fetch_generation_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Generation, target).await
    }

    pub async fn fetch_encounter_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::EncounterMethod, target).await
    }

    pub async fn fetch_stat_details(&self, target: impl Into<QueryTarget>) -> Result<Value> {
        self.fetch_resource(ResourceKind::Stat, target).await
    }
}
