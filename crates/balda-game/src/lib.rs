//! Turn engine for the Balda word game.
//!
//! A [`Game`] drives one session: it seeds the grid with a dictionary word,
//! runs each turn through the [`TurnState`] machine, records committed words
//! in a [`WordHistory`] with undo, and keeps the list of playable
//! [`Candidate`](balda_search::Candidate)s current.
//!
//! Sessions can be captured as a [`GameSnapshot`] and persisted in any
//! [`KeyValueStore`] with [`save_game`] and [`load_game`].

pub use self::{
    error::*, game::*, history::*, options::*, seed::*, snapshot::*, storage::*, turn::*,
};

mod error;
mod game;
mod history;
mod options;
mod seed;
mod snapshot;
mod storage;
mod turn;
