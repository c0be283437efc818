//! Catalog response models
//!
//! This module defines the DTOs for the PokeAPI payloads the shell
//! consumes. Every type derives both Serialize and Deserialize because
//! the gateway round-trips values through the cache's canonical JSON
//! bytes.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonSpecies, PokemonStat, PokemonTypeSlot};
