//! Pokémon models
//!
//! Payloads for the Pokémon detail and species endpoints, plus the
//! human-readable summary the `inspect` command prints.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::models::NamedResource;

/// A Pokémon as returned by `GET /pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null in the API for a handful of special forms
    #[serde(default)]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    /// Link to the species resource, which carries the capture rate
    pub species: NamedResource,
}

/// A single base stat (hp, attack, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the Pokémon's type slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// The species detail (`GET /pokemon-species/{name}`), reduced to the
/// field the catch roll needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    /// Base capture rate, out of 255
    pub capture_rate: u8,
}

impl Pokemon {
    // == Summary ==
    /// Renders the detail block printed by the `inspect` command.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Name: {}", self.name);
        let _ = writeln!(out, "Height: {}", self.height);
        let _ = writeln!(out, "Weight: {}", self.weight);
        let _ = writeln!(out, "Stats:");
        for stat in &self.stats {
            let _ = writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat);
        }
        let _ = writeln!(out, "Types:");
        for slot in &self.types {
            let _ = writeln!(out, "  - {}", slot.kind.name);
        }
        out
    }
}
