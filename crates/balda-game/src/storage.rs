//! Persisting games in a key-value store.

use std::{collections::HashMap, sync::Arc};

use balda_dictionary::Dictionary;

use crate::{Game, GameError, GameOptions, GameSnapshot};

/// Key under which [`save_game`] stores the snapshot.
pub const STORAGE_KEY: &str = "balda-game";

/// A string key-value store, such as browser local storage or a settings file.
pub trait KeyValueStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes the value stored under `key`.
    fn remove(&mut self, key: &str);
}

/// An in-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Stores a snapshot of `game` as JSON under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns [`GameError::Serialization`] if the snapshot cannot be encoded.
pub fn save_game<S>(store: &mut S, game: &Game) -> Result<(), GameError>
where
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(&game.snapshot())?;
    store.set(STORAGE_KEY, json);
    log::debug!("saved game with {} words played", game.history().len());
    Ok(())
}

/// Restores the game stored under [`STORAGE_KEY`], if any.
///
/// # Errors
///
/// Returns [`GameError::Serialization`] if the stored value is not a valid
/// snapshot, and the errors of [`Game::restore`] if it does not describe a
/// consistent game.
pub fn load_game<S>(
    store: &S,
    dict: Arc<Dictionary>,
    options: &GameOptions,
) -> Result<Option<Game>, GameError>
where
    S: KeyValueStore + ?Sized,
{
    let Some(json) = store.get(STORAGE_KEY) else {
        return Ok(None);
    };
    let snapshot: GameSnapshot = serde_json::from_str(&json)?;
    Game::restore(dict, snapshot, options).map(Some)
}
