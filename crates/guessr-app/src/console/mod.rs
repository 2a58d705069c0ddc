//! Console front end: the text the player sees and the loop that drives a
//! session from stdin.

mod game_loop;
mod input;
mod render;


pub use game_loop::play;
