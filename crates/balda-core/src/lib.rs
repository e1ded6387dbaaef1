//! Core data structures for Balda word grids.
//!
//! This crate provides the small value types shared by the dictionary, the
//! path search engine and the turn engine.
//!
//! # Overview
//!
//! - [`letter`]: [`Letter`], a single lower-cased alphabetic token
//! - [`position`]: [`Position`], a `(row, col)` grid coordinate with orthogonal adjacency
//! - [`path`]: [`Path`], an ordered sequence of positions traced through the grid
//! - [`grid`]: [`LetterGrid`], a `rows × cols` matrix of optional letters
//!
//! # Examples
//!
//! ```
//! use balda_core::{LetterGrid, Path, Position};
//!
//! let mut grid = LetterGrid::new(5, 5).unwrap();
//! grid.seed_middle_row("лампа").unwrap();
//!
//! let path: Path = [Position::new(2, 0), Position::new(2, 1)].into_iter().collect();
//! assert!(path.is_simple());
//! assert_eq!(grid.word_along(&path).as_deref(), Some("ла"));
//! ```

pub use self::{error::*, grid::*, letter::*, path::*, position::*};

mod error;
pub mod grid;
pub mod letter;
pub mod path;
pub mod position;
