use crate::core::client::PokeApiClient;
use crate::domain::model::{EvolutionNode, PokemonFull, QueryTarget};
use crate::domain::ports::HttpBackend;
use crate::utils::error::Result;
use serde_json::Value;

/// Appends the species ids of `node` and all its descendants to `acc` in
/// depth-first pre-order: parent first, children in listed order.
///
/// Uses an explicit stack so arbitrarily deep chains cannot overflow.
pub fn extract_evolution_ids(node: Option<&EvolutionNode>, mut acc: Vec<u32>) -> Vec<u32> {
    let Some(root) = node else {
        return acc;
    };

    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        acc.push(current.species_id);
        stack.extend(current.children.iter().rev());
    }

    acc
}

/// `species.evolution_chain.url`, treating null and empty strings as absent.
fn evolution_chain_url(species: &Value) -> Option<&str> {
    species
        .get("evolution_chain")
        .and_then(|chain| chain.get("url"))
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

impl<B: HttpBackend> PokeApiClient<B> {
    /// Details, species and evolution chain for one target.
    ///
    /// Details and species are fetched concurrently; the chain request
    /// depends on the species payload and runs after both complete. Any
    /// failure aborts the whole call with that error.
    pub async fn get_pokemon_full(&self, target: impl Into<QueryTarget>) -> Result<PokemonFull> {
        let target = target.into();
        tracing::debug!("🔍 Aggregating {}", target);

        let (details, species) = tokio::try_join!(
            self.fetch_pokemon_details(&target),
            self.fetch_pokemon_species(&target)
        )?;

        let Some(chain_url) = evolution_chain_url(&species).map(str::to_string) else {
            tracing::info!("🔍 {}: species has no evolution chain", target);
            return Ok(PokemonFull {
                details,
                species,
                evolution_chain: None,
                evolution_ids: Vec::new(),
            });
        };

        let evolution_chain = self.fetch_evolution_chain(&chain_url).await?;

        let root = match evolution_chain.get("chain") {
            Some(chain) if !chain.is_null() => Some(EvolutionNode::from_json(chain)?),
            _ => None,
        };
        let evolution_ids = extract_evolution_ids(root.as_ref(), Vec::new());

        tracing::info!(
            "🔍 {}: aggregated with {} evolution stages",
            target,
            evolution_ids.len()
        );

        Ok(PokemonFull {
            details,
            species,
            evolution_chain: Some(evolution_chain),
            evolution_ids,
        })
    }
}
