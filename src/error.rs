//! Error type shared by the sprite core.
//!
//! Setup failures ([`SpriteError::Configuration`]) are fatal for the sprite
//! sheet being configured. [`SpriteError::UnknownAnimation`] is returned by
//! lookups but recovered by [`Actor::update`](crate::components::actor::Actor::update),
//! which keeps showing the last valid frame.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpriteError {
    /// Invalid grid, sequence or row layout.
    #[error("invalid sprite configuration: {0}")]
    Configuration(String),

    /// The requested animation is not part of the bound animation set.
    #[error("unknown animation '{0}'")]
    UnknownAnimation(String),

    /// The INI configuration file could not be read or written.
    #[error("config file error: {0}")]
    ConfigFile(String),

    /// A texture key was requested that the texture store does not know.
    #[error("sprite sheet '{0}' is not registered")]
    MissingSheet(String),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
