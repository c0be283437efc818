//! Command Handlers
//!
//! One method per shell command. Every remote read goes through the
//! fetch-cache gateway keyed by the request URL, so repeating a command
//! within the cache lifetime costs no network round-trip.

use chrono::Utc;
use rand::Rng;

use crate::cache::fetch_with_cache;
use crate::error::{Error, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon, PokemonSpecies};
use crate::repl::{CaughtPokemon, Flow, Shell, COMMANDS};

impl Shell {
    // == Help ==
    pub(super) fn cmd_help(&self) -> Result<Flow> {
        println!("Welcome to the Pokedex!\nUsage:");
        println!();
        for (name, description) in COMMANDS {
            println!("{}: {}", name, description);
        }
        Ok(Flow::Continue)
    }

    // == Exit ==
    pub(super) fn cmd_exit(&self) -> Result<Flow> {
        println!("Closing the Pokedex... Goodbye!");
        Ok(Flow::Exit)
    }

    // == Map ==
    /// Displays the next page of location areas.
    pub(super) async fn cmd_map(&mut self) -> Result<Flow> {
        let Some(url) = self.next.clone() else {
            println!("you're on the last page");
            return Ok(Flow::Continue);
        };
        self.show_location_page(&url).await?;
        Ok(Flow::Continue)
    }

    // == Map Back ==
    /// Displays the previous page of location areas.
    pub(super) async fn cmd_mapb(&mut self) -> Result<Flow> {
        let Some(url) = self.previous.clone() else {
            println!("you're on the first page");
            return Ok(Flow::Continue);
        };
        self.show_location_page(&url).await?;
        Ok(Flow::Continue)
    }

    /// Fetches one listing page, advances the pagination cursor, and
    /// prints the area names.
    async fn show_location_page(&mut self, url: &str) -> Result<()> {
        let page: LocationAreaPage =
            fetch_with_cache(&self.cache, url, || self.client.location_areas(url)).await?;

        self.next = page.next.clone();
        self.previous = page.previous.clone();

        for area in &page.results {
            println!("{}", area.name);
        }
        Ok(())
    }

    // == Explore ==
    /// Lists the Pokémon encountered in one location area.
    pub(super) async fn cmd_explore(&mut self, args: &[String]) -> Result<Flow> {
        let Some(name) = args.first() else {
            return Err(Error::Usage(
                "explore command requires a location name".to_string(),
            ));
        };
        println!("Exploring {}...", name);

        let url = self.client.location_area_url(name);
        let area: LocationArea =
            fetch_with_cache(&self.cache, &url, || self.client.location_area(&url)).await?;

        println!("Found Pokemon:");
        for encounter in &area.pokemon_encounters {
            println!(" - {}", encounter.pokemon.name);
        }
        Ok(Flow::Continue)
    }

    // == Catch ==
    /// Fetches a Pokémon and its species, then rolls against the species
    /// capture rate to decide whether it joins the pokedex.
    pub(super) async fn cmd_catch(&mut self, args: &[String]) -> Result<Flow> {
        let Some(name) = args.first().cloned() else {
            return Err(Error::Usage(
                "catch command requires a pokemon name".to_string(),
            ));
        };
        println!("Throwing a Pokeball at {}...", name);

        if self.pokedex.contains_key(&name) {
            println!("{} is already in your Pokedex!", name);
            return Ok(Flow::Continue);
        }

        let pokemon_url = self.client.pokemon_url(&name);
        let pokemon: Pokemon =
            fetch_with_cache(&self.cache, &pokemon_url, || self.client.pokemon(&pokemon_url))
                .await?;
        println!("{} has {} base experience", name, pokemon.base_experience);

        let species_url = pokemon.species.url.clone();
        let species: PokemonSpecies = fetch_with_cache(&self.cache, &species_url, || {
            self.client.pokemon_species(&species_url)
        })
        .await?;
        println!(
            "{} has a capture rate of {} (out of 255).",
            name, species.capture_rate
        );

        if catch_roll(species.capture_rate) {
            self.pokedex.insert(
                name.clone(),
                CaughtPokemon {
                    pokemon,
                    caught_at: Utc::now(),
                },
            );
            println!("{} was caught!", name);
        } else {
            println!("{} escaped!", name);
        }
        Ok(Flow::Continue)
    }

    // == Inspect ==
    /// Prints the details of a caught Pokémon.
    pub(super) fn cmd_inspect(&self, args: &[String]) -> Result<Flow> {
        let Some(name) = args.first() else {
            return Err(Error::Usage(
                "inspect command requires a pokemon name".to_string(),
            ));
        };

        match self.pokedex.get(name) {
            Some(caught) => {
                println!("Inspecting {}...", name);
                print!("{}", caught.pokemon.summary());
                println!(
                    "Caught: {}",
                    caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            None => println!("you have not caught that pokemon"),
        }
        Ok(Flow::Continue)
    }

    // == Pokedex ==
    /// Lists every caught Pokémon.
    pub(super) fn cmd_pokedex(&self) -> Result<Flow> {
        println!("Your Pokedex:");
        for name in self.pokedex.keys() {
            println!(" - {}", name);
        }
        Ok(Flow::Continue)
    }
}

// == Catch Roll ==
/// Rolls a uniform number in 0..256 against the capture rate; lower wins.
/// A rate of 255 still fails on a roll of 255, so no catch is guaranteed.
fn catch_roll(capture_rate: u8) -> bool {
    rand::thread_rng().gen_range(0..256) < i32::from(capture_rate)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_catch_roll_zero_rate_never_catches() {
        for _ in 0..100 {
            assert!(!catch_roll(0));
        }
    }

    #[test]
    fn test_catch_roll_high_rate_catches_eventually() {
        // With rate 255 each roll succeeds with probability 255/256; one
        // success in 50 attempts is overwhelmingly likely.
        assert!((0..50).any(|_| catch_roll(255)));
    }

    #[tokio::test]
    async fn test_explore_requires_argument() {
        let mut shell = Shell::new(&Config::default());

        let err = shell.cmd_explore(&[]).await.unwrap_err();
        assert!(err.to_string().contains("requires a location name"));
    }

    #[tokio::test]
    async fn test_catch_requires_argument() {
        let mut shell = Shell::new(&Config::default());

        let err = shell.cmd_catch(&[]).await.unwrap_err();
        assert!(err.to_string().contains("requires a pokemon name"));
    }

    #[tokio::test]
    async fn test_inspect_requires_argument() {
        let shell = Shell::new(&Config::default());

        let err = shell.cmd_inspect(&[]).unwrap_err();
        assert!(err.to_string().contains("requires a pokemon name"));
    }
}
