pub mod arena;
pub mod ball;
pub mod enemy;
pub mod paddle;
