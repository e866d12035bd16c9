//! Game module: the tick engine and the pieces it is built from.

pub mod types;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;
