//! Location area models
//!
//! Payloads for the paginated location-area listing and the per-area
//! detail endpoint.

use serde::{Deserialize, Serialize};

/// A named API resource with its canonical URL.
///
/// PokeAPI uses this shape everywhere it links one resource to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (`GET /location-area`).
///
/// `next` and `previous` carry the fully-qualified URLs of the adjacent
/// pages, or null at either end of the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail of a single location area (`GET /location-area/{name}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokémon that can be encountered in a location area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_deserialize() {
        let json = r#"{
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(json).unwrap();
        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_encounters.len(), 2);
        assert_eq!(area.pokemon_encounters[1].pokemon.name, "staryu");
    }

    #[test]
    fn test_page_round_trip() {
        let page = LocationAreaPage {
            count: 2,
            next: None,
            previous: Some("https://pokeapi.co/api/v2/location-area?offset=0".to_string()),
            results: vec![NamedResource {
                name: "eterna-forest-area".to_string(),
                url: "https://pokeapi.co/api/v2/location-area/20/".to_string(),
            }],
        };

        let bytes = serde_json::to_vec(&page).unwrap();
        let back: LocationAreaPage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, page);
    }
}
