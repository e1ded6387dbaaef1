use std::{cmp::Reverse, mem, sync::Arc};

use balda_core::{Letter, LetterGrid, Path, Position};
use balda_dictionary::Dictionary;
use balda_search::{Candidate, PathSearch};
use rand::seq::IndexedRandom as _;
use rand_pcg::Pcg64;

use crate::{
    DiscardReason, FinishOutcome, GameError, GameOptions, GameSeed, GameSnapshot, TurnPhase,
    TurnState, UnknownWordPolicy, WordHistory, WordHistoryEntry,
};

/// A Balda game session.
///
/// Owns the letter grid, the word history and the state of the current turn,
/// and shares a read-only [`Dictionary`]. After every change to the committed
/// grid the playable words are searched again and exposed through
/// [`Game::candidates`].
///
/// A turn is played by placing one letter ([`Game::place_letter`]), tracing a
/// path through it ([`Game::visit`]) and finishing the path
/// ([`Game::finish_path`]). Alternatively a discovered candidate can be played
/// directly with [`Game::play_candidate`].
///
/// Operations that return [`GameError`] leave the game unchanged. Rule
/// violations that are part of normal play, such as tracing an already used
/// word, are reported through [`FinishOutcome`] instead.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use balda_core::{Letter, Position};
/// use balda_dictionary::Dictionary;
/// use balda_game::{FinishOutcome, Game, GameOptions};
///
/// let dict = Arc::new(Dictionary::from_words(["лампа", "мак"]));
/// let mut game = Game::new(dict, &GameOptions::default())?;
/// assert_eq!(game.initial_word(), Some("лампа"));
///
/// game.place_letter(Position::new(1, 1), Letter::new('к')?)?;
/// for pos in [Position::new(2, 2), Position::new(2, 1), Position::new(1, 1)] {
///     game.visit(pos)?;
/// }
/// assert_eq!(game.finish_path()?, FinishOutcome::Committed);
/// assert_eq!(game.history().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    dict: Arc<Dictionary>,
    unknown_word_policy: UnknownWordPolicy,
    seed: GameSeed,
    rng: Pcg64,
    grid: LetterGrid,
    initial_word: Option<String>,
    history: WordHistory,
    turn: TurnState,
    edit_mode: bool,
    current_letter: Letter,
    hovered: Option<Position>,
    history_highlight: Option<usize>,
    candidates: Vec<Candidate>,
    candidate_preview: Option<usize>,
}

impl Game {
    /// Starts a new game with a freshly seeded grid.
    ///
    /// A random dictionary word with as many letters as the grid has columns
    /// is written across the middle row. If the dictionary has no such word
    /// the grid starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Core`] if the dimensions in `options` are out of range.
    pub fn new(dict: Arc<Dictionary>, options: &GameOptions) -> Result<Self, GameError> {
        let grid = LetterGrid::new(options.rows, options.cols)?;
        let mut game = Self::blank(dict, grid, options);
        game.seed_grid();
        Ok(game)
    }

    /// Starts a game on an existing grid.
    ///
    /// If the middle row is completely filled, the word it spells is taken as
    /// the initial word. The dimensions in `options` are ignored.
    #[must_use]
    pub fn with_grid(dict: Arc<Dictionary>, grid: LetterGrid, options: &GameOptions) -> Self {
        let initial_word = grid
            .rows_iter()
            .nth(grid.middle_row())
            .and_then(|row| row.iter().map(|cell| cell.map(Letter::as_char)).collect());
        let mut game = Self::blank(dict, grid, options);
        game.initial_word = initial_word;
        game.refresh_candidates();
        game
    }

    /// Recreates a game from a snapshot.
    ///
    /// The turn starts over in [`TurnPhase::AddingLetter`]. The dimensions in
    /// `options` are ignored in favor of the snapshot's grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Core`] if the grid text is malformed and
    /// [`GameError::InvalidSnapshot`] if a history entry does not match the grid.
    pub fn restore(
        dict: Arc<Dictionary>,
        snapshot: GameSnapshot,
        options: &GameOptions,
    ) -> Result<Self, GameError> {
        let (grid, initial_word, history) = snapshot.into_parts()?;
        let mut game = Self::blank(dict, grid, options);
        game.initial_word = initial_word;
        game.history = history;
        game.refresh_candidates();
        log::info!(
            "restored a {}x{} game with {} words played",
            game.grid.rows(),
            game.grid.cols(),
            game.history.len()
        );
        Ok(game)
    }

    fn blank(dict: Arc<Dictionary>, grid: LetterGrid, options: &GameOptions) -> Self {
        let seed = options.seed.unwrap_or_else(GameSeed::random);
        Self {
            dict,
            unknown_word_policy: options.unknown_word_policy,
            seed,
            rng: seed.rng(),
            grid,
            initial_word: None,
            history: WordHistory::new(),
            turn: TurnState::AddingLetter,
            edit_mode: false,
            current_letter: Letter::CYRILLIC_A,
            hovered: None,
            history_highlight: None,
            candidates: Vec::new(),
            candidate_preview: None,
        }
    }

    /// Captures the committed grid, initial word and history.
    ///
    /// A pending letter is not part of the snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut grid = self.grid.clone();
        if let Some(pending) = self.turn.pending_cell() {
            grid[pending] = None;
        }
        GameSnapshot::capture(&grid, self.initial_word.clone(), &self.history)
    }

    /// Returns the dictionary.
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dict
    }

    /// Returns the seed driving seed word selection.
    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    /// Returns the unknown word policy.
    #[must_use]
    pub fn unknown_word_policy(&self) -> UnknownWordPolicy {
        self.unknown_word_policy
    }

    /// Changes the unknown word policy. Takes effect at the next [`Game::finish_path`].
    pub fn set_unknown_word_policy(&mut self, policy: UnknownWordPolicy) {
        self.unknown_word_policy = policy;
    }

    /// Returns the grid, including a pending letter if one is placed.
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Returns the full turn state.
    #[must_use]
    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Returns the current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Returns the path being traced, if a letter is pending.
    #[must_use]
    pub fn current_path(&self) -> Option<&Path> {
        self.turn.path()
    }

    /// Returns the cell holding this turn's new letter.
    #[must_use]
    pub fn pending_cell(&self) -> Option<Position> {
        self.turn.pending_cell()
    }

    /// Returns the unknown word awaiting confirmation.
    #[must_use]
    pub fn pending_word(&self) -> Option<&str> {
        self.turn.pending_word()
    }

    /// Returns the hovered cell.
    #[must_use]
    pub fn hovered_cell(&self) -> Option<Position> {
        self.hovered
    }

    /// Returns the committed words.
    #[must_use]
    pub fn history(&self) -> &WordHistory {
        &self.history
    }

    /// Returns the highlighted history entry.
    #[must_use]
    pub fn history_highlight(&self) -> Option<&WordHistoryEntry> {
        self.history_highlight.and_then(|i| self.history.get(i))
    }

    /// Returns the playable words that have not been used yet.
    ///
    /// Sorted longest first. Words of equal length keep the order in which
    /// the search discovered them.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Returns the previewed candidate.
    #[must_use]
    pub fn candidate_preview(&self) -> Option<&Candidate> {
        self.candidate_preview.and_then(|i| self.candidates.get(i))
    }

    /// Returns the word the grid was seeded with.
    #[must_use]
    pub fn initial_word(&self) -> Option<&str> {
        self.initial_word.as_deref()
    }

    /// Returns whether edit mode is active.
    #[must_use]
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Returns the letter placed by [`Game::toggle_cell`].
    #[must_use]
    pub fn current_letter(&self) -> Letter {
        self.current_letter
    }

    /// Returns the initial word followed by every committed word.
    pub fn used_words(&self) -> impl Iterator<Item = &str> {
        self.initial_word
            .as_deref()
            .into_iter()
            .chain(self.history.iter().map(|entry| entry.word.as_str()))
    }

    fn is_used(&self, word: &str) -> bool {
        self.initial_word.as_deref() == Some(word) || self.history.contains_word(word)
    }

    fn ensure_turn_input(&self) -> Result<(), GameError> {
        if self.edit_mode {
            return Err(GameError::EditModeActive);
        }
        Ok(())
    }

    fn selecting_path_mut(&mut self) -> Result<&mut Path, GameError> {
        match &mut self.turn {
            TurnState::SelectingPath { path, .. } => Ok(path),
            TurnState::AddingLetter => Err(GameError::NoPendingLetter),
            TurnState::AwaitingWordConfirmation { .. } => Err(GameError::AwaitingConfirmation),
        }
    }

    /// Places this turn's new letter.
    ///
    /// # Errors
    ///
    /// - [`GameError::EditModeActive`] in edit mode.
    /// - [`GameError::LetterAlreadyPending`] if a letter was already placed this turn.
    /// - [`GameError::CellOccupied`] if the cell is filled.
    /// - [`GameError::Core`] if `pos` is out of range.
    pub fn place_letter(&mut self, pos: Position, letter: Letter) -> Result<(), GameError> {
        self.ensure_turn_input()?;
        if let Some(pending) = self.turn.pending_cell() {
            return Err(GameError::LetterAlreadyPending { pos: pending });
        }
        if self.grid.get(pos)?.is_some() {
            return Err(GameError::CellOccupied { pos });
        }
        self.grid.set(pos, Some(letter))?;
        self.turn = TurnState::SelectingPath {
            pending: pos,
            path: Path::new(),
        };
        log::debug!("placed {letter} at {pos}");
        Ok(())
    }

    /// Removes the pending letter and returns to [`TurnPhase::AddingLetter`].
    ///
    /// Allowed while a path is traced and while a word awaits confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPendingLetter`] if no letter is pending.
    pub fn cancel_pending(&mut self) -> Result<(), GameError> {
        let pending = self.turn.pending_cell().ok_or(GameError::NoPendingLetter)?;
        self.grid[pending] = None;
        self.turn = TurnState::AddingLetter;
        Ok(())
    }

    /// Starts a new path at `pos`, dropping any path traced so far.
    ///
    /// # Errors
    ///
    /// - [`GameError::EditModeActive`] in edit mode.
    /// - [`GameError::NoPendingLetter`] or [`GameError::AwaitingConfirmation`]
    ///   outside [`TurnPhase::SelectingPath`].
    /// - [`GameError::CellEmpty`] if the cell is empty.
    /// - [`GameError::Core`] if `pos` is out of range.
    pub fn start_path(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_turn_input()?;
        if self.grid.get(pos)?.is_none() {
            return Err(GameError::CellEmpty { pos });
        }
        let path = self.selecting_path_mut()?;
        path.clear();
        path.push(pos);
        Ok(())
    }

    /// Feeds a cell to the path being traced.
    ///
    /// On an empty path this starts the path. Visiting the second-to-last cell
    /// backs up by removing the last one. Otherwise the cell is appended if it
    /// is filled, adjacent to the last cell and not yet on the path.
    ///
    /// # Errors
    ///
    /// - [`GameError::EditModeActive`] in edit mode.
    /// - [`GameError::NoPendingLetter`] or [`GameError::AwaitingConfirmation`]
    ///   outside [`TurnPhase::SelectingPath`].
    /// - [`GameError::CellEmpty`] if the cell is empty.
    /// - [`GameError::InvalidPathStep`] if the cell cannot extend the path.
    /// - [`GameError::Core`] if `pos` is out of range.
    pub fn visit(&mut self, pos: Position) -> Result<(), GameError> {
        self.ensure_turn_input()?;
        let cell = self.grid.get(pos)?;
        let path = self.selecting_path_mut()?;
        if path.second_to_last() == Some(pos) {
            path.pop();
            return Ok(());
        }
        if cell.is_none() {
            return Err(GameError::CellEmpty { pos });
        }
        if !path.can_extend(pos) {
            return Err(GameError::InvalidPathStep { pos });
        }
        path.push(pos);
        Ok(())
    }

    /// Ends path tracing and judges the traced word.
    ///
    /// The path is discarded if it is shorter than two cells, misses the new
    /// letter, or spells a used word. An unknown word is discarded or held for
    /// confirmation depending on the [`UnknownWordPolicy`]. A dictionary word
    /// is committed. The pending letter stays in place after a discard so that
    /// another path can be traced.
    ///
    /// # Errors
    ///
    /// - [`GameError::EditModeActive`] in edit mode.
    /// - [`GameError::NoPendingLetter`] or [`GameError::AwaitingConfirmation`]
    ///   outside [`TurnPhase::SelectingPath`].
    pub fn finish_path(&mut self) -> Result<FinishOutcome, GameError> {
        self.ensure_turn_input()?;
        let path = self.selecting_path_mut()?.clone();
        let pending = self.turn.pending_cell().ok_or(GameError::NoPendingLetter)?;

        if path.len() < 2 {
            return Ok(self.discard(DiscardReason::TooShort));
        }
        if !path.contains(pending) {
            return Ok(self.discard(DiscardReason::MissingNewLetter));
        }
        let word = self.grid.word_along(&path).ok_or(GameError::BrokenPath)?;
        if self.is_used(&word) {
            return Ok(self.discard(DiscardReason::DuplicateWord));
        }
        if !self.dict.contains(&word) {
            return Ok(match self.unknown_word_policy {
                UnknownWordPolicy::Reject => self.discard(DiscardReason::UnknownWord),
                UnknownWordPolicy::Confirm => {
                    log::debug!("{word:?} is not in the dictionary, asking for confirmation");
                    self.turn = TurnState::AwaitingWordConfirmation {
                        pending,
                        path,
                        word,
                    };
                    FinishOutcome::NeedsConfirmation
                }
            });
        }
        self.commit(word, path, Some(pending));
        Ok(FinishOutcome::Committed)
    }

    fn discard(&mut self, reason: DiscardReason) -> FinishOutcome {
        if let TurnState::SelectingPath { path, .. } = &mut self.turn {
            path.clear();
        }
        log::debug!("discarded path: {reason}");
        FinishOutcome::Discarded(reason)
    }

    fn commit(&mut self, word: String, path: Path, new_cell: Option<Position>) {
        log::info!("committed {word:?}");
        self.history.push(WordHistoryEntry {
            word,
            path,
            new_cell,
        });
        self.turn = TurnState::AddingLetter;
        self.history_highlight = None;
        self.refresh_candidates();
    }

    /// Commits the word awaiting confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoWordAwaitingConfirmation`] outside
    /// [`TurnPhase::AwaitingWordConfirmation`].
    pub fn confirm_word(&mut self) -> Result<(), GameError> {
        if !self.turn.is_awaiting_word_confirmation() {
            return Err(GameError::NoWordAwaitingConfirmation);
        }
        if let TurnState::AwaitingWordConfirmation {
            pending,
            path,
            word,
        } = mem::take(&mut self.turn)
        {
            self.commit(word, path, Some(pending));
        }
        Ok(())
    }

    /// Drops the word awaiting confirmation and goes back to path tracing.
    ///
    /// The pending letter stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoWordAwaitingConfirmation`] outside
    /// [`TurnPhase::AwaitingWordConfirmation`].
    pub fn reject_word(&mut self) -> Result<(), GameError> {
        let TurnState::AwaitingWordConfirmation { pending, .. } = self.turn else {
            return Err(GameError::NoWordAwaitingConfirmation);
        };
        self.turn = TurnState::SelectingPath {
            pending,
            path: Path::new(),
        };
        Ok(())
    }

    /// Takes back the pending letter, or the most recent word if no letter is
    /// pending.
    ///
    /// The letter placed by the undone move is cleared from the grid. Returns
    /// `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.cancel_pending().is_ok() {
            return true;
        }
        let Some(entry) = self.history.pop() else {
            return false;
        };
        if let Some(cell) = entry.new_cell {
            if let Err(err) = self.grid.clear(cell) {
                log::warn!("cannot clear {cell} while undoing {:?}: {err}", entry.word);
            }
        }
        log::info!("undid {:?}", entry.word);
        self.history_highlight = None;
        self.refresh_candidates();
        true
    }

    /// Starts over on a grid of the same size.
    pub fn reset(&mut self) {
        self.grid.reset_to_empty();
        self.seed_grid();
    }

    /// Starts over on a grid of a new size.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Core`] if the dimensions are out of range.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        self.grid = LetterGrid::new(rows, cols)?;
        self.seed_grid();
        Ok(())
    }

    fn seed_grid(&mut self) {
        self.history.clear();
        self.turn = TurnState::AddingLetter;
        self.hovered = None;
        self.history_highlight = None;

        let cols = self.grid.cols();
        self.initial_word = self.dict.words_of_len(cols).choose(&mut self.rng).cloned();
        match &self.initial_word {
            Some(word) => {
                if let Err(err) = self.grid.seed_middle_row(word) {
                    log::warn!("cannot seed grid with {word:?}: {err}");
                    self.initial_word = None;
                }
            }
            None => log::warn!("no {cols}-letter word to seed the grid with, leaving it empty"),
        }
        log::info!(
            "new {}x{} game seeded with {:?}",
            self.grid.rows(),
            cols,
            self.initial_word
        );
        self.refresh_candidates();
    }

    /// Plays the candidate at `index` of [`Game::candidates`].
    ///
    /// A pending letter is taken back first, as is a word awaiting
    /// confirmation. The move is recorded exactly like a traced word, with the
    /// candidate's new cell cleared again on undo.
    ///
    /// # Errors
    ///
    /// - [`GameError::EditModeActive`] in edit mode.
    /// - [`GameError::CandidateOutOfRange`] if there is no such candidate.
    /// - [`GameError::StaleCandidate`] if the candidate no longer fits the grid.
    pub fn play_candidate(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_turn_input()?;
        let candidate = self
            .candidates
            .get(index)
            .ok_or(GameError::CandidateOutOfRange { index })?
            .clone();

        let mut grid = self.grid.clone();
        if let Some(pending) = self.turn.pending_cell() {
            grid[pending] = None;
        }
        if self.is_used(&candidate.word) || !candidate.is_playable_on(&grid) {
            return Err(GameError::StaleCandidate {
                word: candidate.word,
            });
        }

        let Candidate {
            word,
            path,
            new_cell,
            new_letter,
        } = candidate;
        grid[new_cell] = Some(new_letter);
        self.grid = grid;
        self.commit(word, path, Some(new_cell));
        Ok(())
    }

    /// Turns edit mode on or off.
    ///
    /// Entering edit mode takes back the pending letter. While it is active,
    /// turn input is rejected and cells are changed with [`Game::toggle_cell`].
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if enabled && !self.edit_mode {
            if let Some(pending) = self.turn.pending_cell() {
                self.grid[pending] = None;
            }
            self.turn = TurnState::AddingLetter;
        }
        self.edit_mode = enabled;
    }

    /// Fills an empty cell with the current letter or empties a filled one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EditModeInactive`] outside edit mode and
    /// [`GameError::Core`] if `pos` is out of range.
    pub fn toggle_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if !self.edit_mode {
            return Err(GameError::EditModeInactive);
        }
        let next = match self.grid.get(pos)? {
            Some(_) => None,
            None => Some(self.current_letter),
        };
        self.grid.set(pos, next)?;
        self.refresh_candidates();
        Ok(())
    }

    /// Sets the letter used by [`Game::toggle_cell`].
    pub fn set_current_letter(&mut self, letter: Letter) {
        self.current_letter = letter;
    }

    /// Sets or clears the hovered cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Core`] if `pos` is out of range.
    pub fn hover(&mut self, pos: Option<Position>) -> Result<(), GameError> {
        if let Some(pos) = pos {
            self.grid.get(pos)?;
        }
        self.hovered = pos;
        Ok(())
    }

    /// Selects a history entry for inspection, or clears the selection.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::HistoryOutOfRange`] if there is no such entry.
    pub fn set_history_highlight(&mut self, index: Option<usize>) -> Result<(), GameError> {
        if let Some(index) = index {
            if index >= self.history.len() {
                return Err(GameError::HistoryOutOfRange { index });
            }
        }
        self.history_highlight = index;
        Ok(())
    }

    /// Selects a candidate for preview, or clears the selection.
    ///
    /// The selection is cleared whenever the candidates are searched again.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CandidateOutOfRange`] if there is no such candidate.
    pub fn set_candidate_preview(&mut self, index: Option<usize>) -> Result<(), GameError> {
        if let Some(index) = index {
            if index >= self.candidates.len() {
                return Err(GameError::CandidateOutOfRange { index });
            }
        }
        self.candidate_preview = index;
        Ok(())
    }

    fn refresh_candidates(&mut self) {
        let mut found = PathSearch::new(&self.dict).search(&mut self.grid);
        found.retain(|candidate| !self.is_used(&candidate.word));
        found.sort_by_key(|candidate| Reverse(candidate.len()));
        self.candidates = found;
        self.candidate_preview = None;
    }
}
