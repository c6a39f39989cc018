//! the window around the game: configuration, assets, layout, input and drawing

pub mod config;
pub mod drawing;
pub mod error;
pub mod input;
pub mod l10n;
pub mod layout;
pub mod state;
pub mod textures;
