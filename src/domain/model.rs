use crate::utils::error::{PokeApiError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An upstream resource address: numeric id or lowercase slug name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryTarget {
    Id(u32),
    Name(String),
}

impl QueryTarget {
    /// Strict parse used for user input. Rejects ids of zero and anything
    /// that would not survive as a single path segment.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| PokeApiError::InvalidQuery {
            value: input.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("target cannot be empty"));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return match trimmed.parse::<u32>() {
                Ok(0) => Err(invalid("ids start at 1")),
                Ok(id) => Ok(QueryTarget::Id(id)),
                Err(_) => Err(invalid("id is out of range")),
            };
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&'))
        {
            return Err(invalid("names cannot contain whitespace or URL delimiters"));
        }

        Ok(QueryTarget::Name(trimmed.to_lowercase()))
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryTarget::Id(id) => write!(f, "{}", id),
            QueryTarget::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u32> for QueryTarget {
    fn from(id: u32) -> Self {
        QueryTarget::Id(id)
    }
}

impl From<&str> for QueryTarget {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<u32>() {
            Ok(id) if id > 0 => QueryTarget::Id(id),
            _ => QueryTarget::Name(trimmed.to_lowercase()),
        }
    }
}

impl From<String> for QueryTarget {
    fn from(value: String) -> Self {
        QueryTarget::from(value.as_str())
    }
}

impl From<&QueryTarget> for QueryTarget {
    fn from(value: &QueryTarget) -> Self {
        value.clone()
    }
}

impl FromStr for QueryTarget {
    type Err = PokeApiError;

    fn from_str(s: &str) -> Result<Self> {
        QueryTarget::parse(s)
    }
}

/// Resource collections exposed by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    PokemonSpecies,
    Ability,
    Type,
    Move,
    Item,
    Location,
    Region,
    Generation,
    EncounterMethod,
    Stat,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Pokemon,
        ResourceKind::PokemonSpecies,
        ResourceKind::Ability,
        ResourceKind::Type,
        ResourceKind::Move,
        ResourceKind::Item,
        ResourceKind::Location,
        ResourceKind::Region,
        ResourceKind::Generation,
        ResourceKind::EncounterMethod,
        ResourceKind::Stat,
    ];

    /// Collection path segment on the upstream API.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Pokemon => "pokemon",
            ResourceKind::PokemonSpecies => "pokemon-species",
            ResourceKind::Ability => "ability",
            ResourceKind::Type => "type",
            ResourceKind::Move => "move",
            ResourceKind::Item => "item",
            ResourceKind::Location => "location",
            ResourceKind::Region => "region",
            ResourceKind::Generation => "generation",
            ResourceKind::EncounterMethod => "encounter-method",
            ResourceKind::Stat => "stat",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = PokeApiError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ResourceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.path() == normalized)
            .ok_or_else(|| PokeApiError::InvalidConfigValueError {
                field: "resource_kind".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unknown resource kind. Valid kinds: {}",
                    ResourceKind::ALL
                        .iter()
                        .map(|k| k.path())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}

/// Pagination for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// A `{ name, url }` reference as returned inline by the upstream API.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub name: Option<String>,
    pub url: String,
}

/// Raw chain link exactly as the upstream evolution-chain payload nests it.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: ResourceRef,
    #[serde(default, deserialize_with = "children_or_empty")]
    pub evolves_to: Vec<ChainLink>,
}

/// `evolves_to` that is null or not an array marks a leaf.
fn children_or_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ChainLink>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// One species in an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species_id: u32,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn leaf(species_id: u32) -> Self {
        Self {
            species_id,
            children: Vec::new(),
        }
    }

    pub fn with_children(species_id: u32, children: Vec<EvolutionNode>) -> Self {
        Self {
            species_id,
            children,
        }
    }

    /// Converts the untyped `chain` object of an evolution-chain payload.
    pub fn from_json(chain: &serde_json::Value) -> Result<Self> {
        let link: ChainLink = serde_json::from_value(chain.clone())?;
        EvolutionNode::try_from(&link)
    }
}

impl TryFrom<&ChainLink> for EvolutionNode {
    type Error = PokeApiError;

    fn try_from(link: &ChainLink) -> Result<Self> {
        let species_id = species_id_from_url(&link.species.url).ok_or_else(|| {
            PokeApiError::Parse {
                message: format!("species reference has no numeric id: {}", link.species.url),
            }
        })?;

        let children = link
            .evolves_to
            .iter()
            .map(EvolutionNode::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(EvolutionNode {
            species_id,
            children,
        })
    }
}

/// Last non-empty path segment of a resource URL, as an integer.
pub fn species_id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .and_then(|segment| segment.parse().ok())
}

/// Denormalized view of a species across details, species and evolution chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonFull {
    pub details: serde_json::Value,
    pub species: serde_json::Value,
    pub evolution_chain: Option<serde_json::Value>,
    pub evolution_ids: Vec<u32>,
}
