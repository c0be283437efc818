//! REPL Module
//!
//! The interactive shell: line editing, input tokenizing, command
//! dispatch, and the shell state (pagination cursor and the caught-Pokémon
//! collection).

mod commands;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::cache::Cache;
use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::Pokemon;

// == Command Table ==
/// The commands the shell understands, with the descriptions `help` prints.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Display the next 20 location areas"),
    ("mapb", "Display the previous 20 location areas"),
    ("explore", "List the Pokemon found in a location area"),
    ("catch", "Throw a Pokeball at a Pokemon to catch it"),
    ("inspect", "Inspect a Pokemon in your Pokedex"),
    ("pokedex", "List all the Pokemon you have caught"),
];

// == Flow ==
/// Whether the interactive loop should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Caught Pokemon ==
/// A Pokémon in the user's collection, with the moment it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

// == Shell ==
/// State of the interactive Pokédex shell.
pub struct Shell {
    /// Catalog client; handlers wrap its calls for the gateway
    client: PokeApiClient,
    /// TTL response cache keyed by request URL
    cache: Cache,
    /// URL of the next listing page, None on the last page
    next: Option<String>,
    /// URL of the previous listing page, None on the first page
    previous: Option<String>,
    /// Caught Pokémon by name
    pokedex: HashMap<String, CaughtPokemon>,
}

impl Shell {
    // == Constructor ==
    /// Creates a new shell from configuration.
    ///
    /// Constructing the cache spawns its sweep task, so this must run
    /// inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let client = PokeApiClient::new(config);
        let cache = Cache::new(std::time::Duration::from_secs(config.cache_interval_secs));
        let next = Some(client.location_areas_url());

        Self {
            client,
            cache,
            next,
            previous: None,
            pokedex: HashMap::new(),
        }
    }

    // == Run ==
    /// Runs the interactive loop until `exit` or end-of-input.
    ///
    /// Command errors are printed and the loop continues; only a broken
    /// terminal ends the loop with an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline("Pokedex > ") {
                Ok(line) => {
                    let words = clean_input(&line);
                    let Some((command, args)) = words.split_first() else {
                        continue;
                    };
                    let _ = editor.add_history_entry(line.as_str());

                    match self.dispatch(command, args).await {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {}
                        Err(err) => println!("Error executing {}: {}", command, err),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Closing the Pokedex... Goodbye!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        let stats = self.cache.stats().await;
        debug!(
            "cache at exit: {} entries, {} hits, {} misses, {} sweep evictions",
            stats.total_entries, stats.hits, stats.misses, stats.evictions
        );

        Ok(())
    }

    // == Dispatch ==
    /// Routes one tokenized input line to its command handler.
    pub async fn dispatch(&mut self, command: &str, args: &[String]) -> Result<Flow> {
        debug!("dispatching command {:?}", command);

        match command {
            "help" => self.cmd_help(),
            "exit" => self.cmd_exit(),
            "map" => self.cmd_map().await,
            "mapb" => self.cmd_mapb().await,
            "explore" => self.cmd_explore(args).await,
            "catch" => self.cmd_catch(args).await,
            "inspect" => self.cmd_inspect(args),
            "pokedex" => self.cmd_pokedex(),
            _ => {
                println!("Unknown command: {}", command);
                Ok(Flow::Continue)
            }
        }
    }
}

// == Input Cleaning ==
/// Lowercases and whitespace-tokenizes one input line.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
