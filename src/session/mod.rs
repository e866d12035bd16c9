//! Session layer root module.
//!
//! This module drives the tick engine in real time:
//! - `server`: the `GameSession` actor holding one engine and its observers
//! - `tick_loop`: arming, resolving and cancelling the single tick timer
//! - `messages`: lifecycle/input messages in, `SessionEvent`s out

pub mod server;
pub mod tick_loop;
pub mod messages;

pub use server::GameSession;
