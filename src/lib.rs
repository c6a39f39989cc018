pub mod libclient;
pub mod libgame;
