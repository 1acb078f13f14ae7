pub mod config;
pub mod error;
pub mod logging;

pub mod render;
pub mod script;
pub mod store;
pub mod verify;
