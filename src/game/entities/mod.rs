//! Game entities module.
//!
//! This module organizes snake spawning and food placement logic.

pub mod snake;
pub mod food;

pub use snake::*;
pub use food::*;
