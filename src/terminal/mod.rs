// Terminal front end for a game session: translates typed commands into
// session messages and draws the board from session events.
pub mod input;
pub mod render;
pub mod view;
