pub mod app;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{Ball, Boundary, Enemy, FloorPlane, Paddle};
pub use crate::core::config::{GameConfig, WindowConfig};
pub use crate::core::score::Score;
