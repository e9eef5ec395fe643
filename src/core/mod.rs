pub mod components;
pub mod config;
pub mod events;
pub mod score;
pub mod system;
