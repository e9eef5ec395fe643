use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Layered config sources; later files override earlier ones key-by-key.
pub const CONFIG_LAYER_PATHS: [&str; 2] = [
    "assets/config/game.ron",
    "assets/config/game.local.ron",
];

/// What the startup loader found, stashed so it can be logged once the app
/// (and its log subscriber) is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub layers_used: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Vec3Def {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Vec3Def {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
}
impl From<Vec3Def> for Vec3 {
    fn from(v: Vec3Def) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// Plain sRGB triplet so colors stay readable in RON.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RgbDef {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Default for RgbDef {
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }
}
impl From<RgbDef> for Color {
    fn from(c: RgbDef) -> Self {
        Color::srgb(c.r, c.g, c.b)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Ball Bouncer".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the origin along +Z.
    pub distance: f32,
    pub fov_degrees: f32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 20.0,
            fov_degrees: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -30.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    /// Applied to every collider; contact pairs average their coefficients.
    pub restitution: f32,
}
impl Default for BounceConfig {
    fn default() -> Self {
        Self { restitution: 1.1 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub mass: f32,
    pub spawn: Vec3Def,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            mass: 0.1,
            spawn: Vec3Def::ZERO,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PaddleConfig {
    pub size: Vec3Def,
    /// Height of the paddle above the bottom frustum edge.
    pub lift: f32,
    /// Radians of z-tilt per unit of normalized pointer x.
    pub tilt_scale: f32,
}
impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            size: Vec3Def {
                x: 2.0,
                y: 0.5,
                z: 1.0,
            },
            lift: 1.0,
            tilt_scale: std::f32::consts::PI / 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyDef {
    pub color: RgbDef,
    pub position: Vec3Def,
    pub size: Vec3Def,
}
impl Default for EnemyDef {
    fn default() -> Self {
        Self {
            color: RgbDef::default(),
            position: Vec3Def::ZERO,
            size: Vec3Def {
                x: 2.0,
                y: 0.5,
                z: 1.0,
            },
        }
    }
}
fn default_enemies() -> Vec<EnemyDef> {
    vec![
        // orange
        EnemyDef {
            color: RgbDef {
                r: 1.0,
                g: 0.647,
                b: 0.0,
            },
            position: Vec3Def {
                x: 2.0,
                y: 1.0,
                z: 0.0,
            },
            ..Default::default()
        },
        // hotpink
        EnemyDef {
            color: RgbDef {
                r: 1.0,
                g: 0.412,
                b: 0.706,
            },
            position: Vec3Def {
                x: -2.0,
                y: 3.0,
                z: 0.0,
            },
            ..Default::default()
        },
    ]
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HudConfig {
    pub font_size: f32,
    pub margin_px: f32,
}
impl Default for HudConfig {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            margin_px: 12.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub gravity: GravityConfig,
    pub bounce: BounceConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    #[serde(default = "default_enemies")]
    pub enemies: Vec<EnemyDef>,
    pub hud: HudConfig,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            camera: Default::default(),
            gravity: Default::default(),
            bounce: Default::default(),
            ball: Default::default(),
            paddle: Default::default(),
            enemies: default_enemies(),
            hud: Default::default(),
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Merge every readable layer on top of the previous ones, then
    /// deserialize the combined value. Unreadable or unparsable layers are
    /// reported, never fatal.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        let mut replaced = false;
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                let val = incoming.take().unwrap();
                                merge_value(ev, val);
                                replaced = true;
                                break;
                            }
                        }
                        if !replaced {
                            bm.insert(k, incoming.unwrap());
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        if let Some(val) = merged {
            match val.clone().into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => (GameConfig::default(), used, {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    evec
                }),
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.camera.distance <= 0.0 {
            w.push("camera.distance must be > 0".into());
        }
        if !(10.0..=170.0).contains(&self.camera.fov_degrees) {
            w.push(format!(
                "camera.fov_degrees {} outside sensible 10..170",
                self.camera.fov_degrees
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; ball may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); Y-up world? typical configs use negative for downward",
                self.gravity.y
            ));
        }
        if self.gravity.y < -2000.0 {
            w.push(format!(
                "gravity.y very large magnitude ({}); integration instability possible",
                self.gravity.y
            ));
        }
        if !(0.0..=1.5).contains(&self.bounce.restitution) {
            w.push(format!(
                "restitution {} outside recommended 0..1.5",
                self.bounce.restitution
            ));
        }
        if self.bounce.restitution < 0.0 {
            w.push("restitution negative -> energy gain/clamping side effects".into());
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if self.ball.mass <= 0.0 {
            w.push("ball.mass must be > 0".into());
        }
        fn check_extent(w: &mut Vec<String>, label: &str, size: &Vec3Def) {
            if size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
                w.push(format!(
                    "{label} extents must be > 0 (got {} x {} x {})",
                    size.x, size.y, size.z
                ));
            }
        }
        check_extent(&mut w, "paddle.size", &self.paddle.size);
        if self.paddle.lift < 0.0 {
            w.push("paddle.lift negative; paddle sits below the arena edge".into());
        }
        if !(0.0..=std::f32::consts::FRAC_PI_2).contains(&self.paddle.tilt_scale) {
            w.push(format!(
                "paddle.tilt_scale {} outside 0..pi/2; tilt may flip the paddle",
                self.paddle.tilt_scale
            ));
        }
        if self.enemies.is_empty() {
            w.push("enemies list is empty; nothing to score against".into());
        }
        for (i, e) in self.enemies.iter().enumerate() {
            check_extent(&mut w, &format!("enemies[{i}].size"), &e.size);
        }
        if self.hud.font_size <= 0.0 {
            w.push("hud.font_size must be > 0".into());
        }
        w
    }
}
