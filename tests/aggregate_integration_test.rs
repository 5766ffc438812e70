use httpmock::prelude::*;
use pokedex_client::{ClientConfig, PokeApiClient, PokeApiError};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

fn client_for(server: &MockServer) -> PokeApiClient {
    let mut config = ClientConfig::default();
    config.api.base_url = server.url("/api/v2/");
    PokeApiClient::from_config(&config).unwrap()
}

fn species_ref(server: &MockServer, id: u32) -> Value {
    json!({"name": format!("species-{}", id), "url": server.url(format!("/api/v2/pokemon-species/{}/", id))})
}

/// Mocks details, species and (optionally) the evolution chain for one target.
async fn mock_species(server: &MockServer, target: &str, chain_id: Option<u32>, chain: Value) {
    let details_path = format!("/api/v2/pokemon/{}", target);
    let species_path = format!("/api/v2/pokemon-species/{}", target);

    server
        .mock_async(|when, then| {
            when.method(GET).path(details_path);
            then.status(200).json_body(json!({"name": target}));
        })
        .await;

    let evolution_chain = chain_id
        .map(|id| json!({"url": server.url(format!("/api/v2/evolution-chain/{}/", id))}))
        .unwrap_or(Value::Null);

    server
        .mock_async(|when, then| {
            when.method(GET).path(species_path);
            then.status(200)
                .json_body(json!({"name": target, "evolution_chain": evolution_chain}));
        })
        .await;

    if let Some(id) = chain_id {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/api/v2/evolution-chain/{}/", id));
                then.status(200).json_body(json!({"id": id, "chain": chain}));
            })
            .await;
    }
}

#[tokio::test]
async fn test_full_with_branching_chain() {
    let server = MockServer::start_async().await;
    // eevee -> {vaporeon, jolteon, flareon}
    let chain = json!({
        "species": species_ref(&server, 133),
        "evolves_to": [
            {"species": species_ref(&server, 134), "evolves_to": []},
            {"species": species_ref(&server, 135), "evolves_to": []},
            {"species": species_ref(&server, 136), "evolves_to": []}
        ]
    });
    mock_species(&server, "eevee", Some(67), chain).await;

    let client = client_for(&server);
    let full = client.get_pokemon_full("eevee").await.unwrap();

    assert_eq!(full.details["name"], "eevee");
    assert_eq!(full.species["name"], "eevee");
    assert_eq!(full.evolution_chain.as_ref().unwrap()["id"], 67);
    assert_eq!(full.evolution_ids, vec![133, 134, 135, 136]);
}

#[tokio::test]
async fn test_full_with_null_evolves_to_still_returns_ids() {
    let server = MockServer::start_async().await;
    let chain = json!({
        "species": species_ref(&server, 1),
        "evolves_to": [{"species": species_ref(&server, 2), "evolves_to": null}]
    });
    mock_species(&server, "bulbasaur", Some(1), chain).await;

    let client = client_for(&server);
    let full = client.get_pokemon_full("bulbasaur").await.unwrap();

    assert_eq!(full.evolution_chain.as_ref().unwrap()["id"], 1);
    assert_eq!(full.evolution_ids, vec![1, 2]);
}

#[tokio::test]
async fn test_full_without_chain_link() {
    let server = MockServer::start_async().await;
    mock_species(&server, "10001", None, Value::Null).await;

    let client = client_for(&server);
    let full = client.get_pokemon_full(10001u32).await.unwrap();

    assert_eq!(full.details["name"], "10001");
    assert_eq!(full.species["name"], "10001");
    assert!(full.evolution_chain.is_none());
    assert!(full.evolution_ids.is_empty());
}

#[tokio::test]
async fn test_details_404_aborts_aggregate() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/pokemon/missingno");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/pokemon-species/missingno");
            then.status(200).json_body(json!({"evolution_chain": null}));
        })
        .await;

    let client = client_for(&server);
    let err = client.get_pokemon_full("missingno").await.unwrap_err();

    assert!(matches!(err, PokeApiError::NotFound { .. }));
}

#[tokio::test]
async fn test_details_and_species_are_fetched_concurrently() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/pokemon/ditto");
            then.status(200)
                .delay(Duration::from_millis(400))
                .json_body(json!({"id": 132}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v2/pokemon-species/ditto");
            then.status(200)
                .delay(Duration::from_millis(400))
                .json_body(json!({"id": 132, "evolution_chain": null}));
        })
        .await;

    let client = client_for(&server);
    let started = Instant::now();
    client.get_pokemon_full("ditto").await.unwrap();

    assert!(started.elapsed() < Duration::from_millis(750));
}

#[tokio::test]
async fn test_concurrent_aggregates_do_not_share_state() {
    let server = MockServer::start_async().await;

    let bulbasaur_chain = json!({
        "species": species_ref(&server, 1),
        "evolves_to": [{
            "species": species_ref(&server, 2),
            "evolves_to": [{"species": species_ref(&server, 3), "evolves_to": []}]
        }]
    });
    let pichu_chain = json!({
        "species": species_ref(&server, 172),
        "evolves_to": [{
            "species": species_ref(&server, 25),
            "evolves_to": [{"species": species_ref(&server, 26), "evolves_to": []}]
        }]
    });
    mock_species(&server, "bulbasaur", Some(1), bulbasaur_chain).await;
    mock_species(&server, "pikachu", Some(10), pichu_chain).await;

    let client = client_for(&server);
    let (bulbasaur, pikachu) = tokio::join!(
        client.get_pokemon_full("bulbasaur"),
        client.get_pokemon_full("pikachu")
    );

    assert_eq!(bulbasaur.unwrap().evolution_ids, vec![1, 2, 3]);
    assert_eq!(pikachu.unwrap().evolution_ids, vec![172, 25, 26]);
}

#[tokio::test]
async fn test_aggregate_serializes_camel_case() {
    let server = MockServer::start_async().await;
    let chain = json!({"species": species_ref(&server, 132), "evolves_to": []});
    mock_species(&server, "ditto", Some(66), chain).await;

    let client = client_for(&server);
    let full = client.get_pokemon_full("ditto").await.unwrap();
    let value = serde_json::to_value(&full).unwrap();

    assert_eq!(value["evolutionIds"], json!([132]));
    assert_eq!(value["evolutionChain"]["id"], 66);
    assert_eq!(value["details"]["name"], "ditto");
}
