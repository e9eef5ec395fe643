pub mod camera;
pub mod hud;
pub mod lighting;
