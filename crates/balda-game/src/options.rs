use crate::GameSeed;

/// What happens when a traced word is not in the dictionary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum UnknownWordPolicy {
    /// Discard the path as if the word were illegal.
    Reject,
    /// Hold the word until the player confirms or rejects it.
    #[default]
    Confirm,
}

/// Settings for a new [`Game`](crate::Game).
///
/// # Example
///
/// ```
/// use balda_game::{GameOptions, UnknownWordPolicy};
///
/// let options = GameOptions::default()
///     .size(7, 7)
///     .unknown_word_policy(UnknownWordPolicy::Reject);
/// assert_eq!((options.rows, options.cols), (7, 7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns, which is also the seed word length.
    pub cols: usize,
    /// Handling of words missing from the dictionary.
    pub unknown_word_policy: UnknownWordPolicy,
    /// Seed for picking seed words. A random seed is used when `None`.
    pub seed: Option<GameSeed>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            unknown_word_policy: UnknownWordPolicy::default(),
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the grid dimensions.
    #[must_use]
    pub fn size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the unknown word policy.
    #[must_use]
    pub fn unknown_word_policy(mut self, policy: UnknownWordPolicy) -> Self {
        self.unknown_word_policy = policy;
        self
    }

    /// Fixes the random seed.
    #[must_use]
    pub fn seed(mut self, seed: GameSeed) -> Self {
        self.seed = Some(seed);
        self
    }
}
