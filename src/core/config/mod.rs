pub mod config;

pub use config::{
    BallConfig, BounceConfig, CameraConfig, ConfigLoadReport, EnemyDef, GameConfig, GravityConfig,
    HudConfig, PaddleConfig, RgbDef, Vec3Def, WindowConfig, CONFIG_LAYER_PATHS,
};
