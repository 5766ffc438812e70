pub mod aggregate;
pub mod client;
pub mod routes;
pub mod sprites;
pub mod transport;

pub use crate::domain::model::{EvolutionNode, PageRequest, PokemonFull, QueryTarget, ResourceKind};
pub use crate::domain::ports::{HttpBackend, HttpRequest, HttpResponse};
pub use crate::utils::error::Result;
