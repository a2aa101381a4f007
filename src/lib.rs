//! In-game pause and settings menu with a persisted option snapshot.
//!
//! The menu draws and reads input through [`core::Host`]; everything it edits
//! lives in [`game::options::Options`].

pub mod config;
pub mod core;
pub mod game;
pub mod menu;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode option snapshot: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    #[error("failed to decode option snapshot: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    #[error("failed to read config: {0}")]
    Ini(#[from] ini::Error),
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
