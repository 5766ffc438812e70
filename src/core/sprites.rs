const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other";

pub fn dream_world_sprite_url(id: u32) -> String {
    format!("{}/dream-world/{}.svg", ARTWORK_BASE, id)
}

pub fn official_artwork_url(id: u32) -> String {
    format!("{}/official-artwork/{}.png", ARTWORK_BASE, id)
}

/// Artwork URLs in preference order. Callers fall back to the next entry
/// when one fails to load.
pub fn sprite_candidates(id: u32) -> Vec<String> {
    vec![dream_world_sprite_url(id), official_artwork_url(id)]
}
