pub mod cli;
pub mod config;
pub mod game_clock;

pub use cli::*;
pub use config::*;
pub use game_clock::*;
